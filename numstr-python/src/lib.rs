use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use numstr_fmt::consts::{
    BIN_PREFIX, BIN_STR_MAX_SIZE, F32_STR_MAX_SIZE, HEX_STR_MAX_SIZE, S64_STR_MAX_SIZE,
    U64_STR_MAX_SIZE,
};
use numstr_fmt::{FormatError, FormatErrorKind, NumBuf};

fn format_error_to_py(e: FormatError) -> PyErr {
    let kind = match e.kind {
        FormatErrorKind::BufferTooSmall => "buffer_too_small",
        FormatErrorKind::InvalidWidth => "invalid_width",
    };
    PyValueError::new_err(format!("{}:{}", kind, e.needed))
}

fn to_py<const N: usize>(result: Result<NumBuf<N>, FormatError>) -> PyResult<String> {
    result
        .map(|text| text.as_str().to_owned())
        .map_err(format_error_to_py)
}

#[pyfunction]
fn u32_to_str_native(num: u32) -> PyResult<String> {
    to_py(NumBuf::<U64_STR_MAX_SIZE>::u32(num))
}

#[pyfunction]
fn u64_to_str_native(num: u64) -> PyResult<String> {
    to_py(NumBuf::<U64_STR_MAX_SIZE>::u64(num))
}

#[pyfunction]
fn s32_to_str_native(num: i32) -> PyResult<String> {
    to_py(NumBuf::<S64_STR_MAX_SIZE>::s32(num))
}

#[pyfunction]
fn s64_to_str_native(num: i64) -> PyResult<String> {
    to_py(NumBuf::<S64_STR_MAX_SIZE>::s64(num))
}

#[pyfunction]
fn f32_to_str_native(num: f32) -> PyResult<String> {
    to_py(NumBuf::<F32_STR_MAX_SIZE>::f32(num))
}

#[pyfunction]
fn u32_to_min_hex_str_native(num: u32) -> PyResult<String> {
    to_py(NumBuf::<HEX_STR_MAX_SIZE>::min_hex32(num))
}

#[pyfunction]
fn u64_to_min_hex_str_native(num: u64) -> PyResult<String> {
    to_py(NumBuf::<HEX_STR_MAX_SIZE>::min_hex64(num))
}

#[pyfunction]
fn u32_to_min_bin_str_native(num: u32) -> PyResult<String> {
    to_py(NumBuf::<BIN_STR_MAX_SIZE>::min_bin32(num))
}

#[pyfunction]
fn u64_to_min_bin_str_native(num: u64) -> PyResult<String> {
    to_py(NumBuf::<BIN_STR_MAX_SIZE>::min_bin64(num))
}

/// Widest padding the sized converters accept, the digit count of a full
/// 64-bit binary string.
pub const SIZED_WIDTH_MAX: usize = BIN_STR_MAX_SIZE - BIN_PREFIX.len();

type SizedBuf = NumBuf<SIZED_WIDTH_MAX>;

/// Rejects zero and anything past `SIZED_WIDTH_MAX` before a buffer is touched.
fn check_sized_width(width: usize) -> Result<(), FormatError> {
    if width == 0 || width > SIZED_WIDTH_MAX {
        return Err(FormatError::invalid_width());
    }
    Ok(())
}

fn sized_to_py(
    width: usize,
    convert: impl FnOnce() -> Result<SizedBuf, FormatError>,
) -> PyResult<String> {
    if check_sized_width(width).is_err() {
        return Err(PyValueError::new_err(format!("invalid_width:{width}")));
    }
    to_py(convert())
}

#[pyfunction]
fn u32_to_sized_hex_str_native(num: u32, nibble_count: usize) -> PyResult<String> {
    sized_to_py(nibble_count, || SizedBuf::sized_hex32(num, nibble_count))
}

#[pyfunction]
fn u64_to_sized_hex_str_native(num: u64, nibble_count: usize) -> PyResult<String> {
    sized_to_py(nibble_count, || SizedBuf::sized_hex64(num, nibble_count))
}

#[pyfunction]
fn u32_to_sized_bin_str_native(num: u32, bit_count: usize) -> PyResult<String> {
    sized_to_py(bit_count, || SizedBuf::sized_bin32(num, bit_count))
}

#[pyfunction]
fn u64_to_sized_bin_str_native(num: u64, bit_count: usize) -> PyResult<String> {
    sized_to_py(bit_count, || SizedBuf::sized_bin64(num, bit_count))
}

#[pyfunction]
fn u32_str_size_native(num: u32) -> usize {
    numstr_fmt::u32_str_size(num)
}

#[pyfunction]
fn u64_str_size_native(num: u64) -> usize {
    numstr_fmt::u64_str_size(num)
}

#[pymodule]
fn _numstr_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(u32_to_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(u64_to_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(s32_to_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(s64_to_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(f32_to_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(u32_to_min_hex_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(u64_to_min_hex_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(u32_to_min_bin_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(u64_to_min_bin_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(u32_to_sized_hex_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(u64_to_sized_hex_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(u32_to_sized_bin_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(u64_to_sized_bin_str_native, m)?)?;
    m.add_function(wrap_pyfunction!(u32_str_size_native, m)?)?;
    m.add_function(wrap_pyfunction!(u64_str_size_native, m)?)?;
    Ok(())
}
