use footprint_core::python::core;
use pyo3::prelude::*;
use pyo3::wrap_pymodule;

#[pymodule]
#[pyo3(name = "_lib")]
fn footprint(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_wrapped(wrap_pymodule!(core))?;

    set_path(m, "footprint._lib.core", "core")?;

    Ok(())
}

/// Register a submodule in `sys.modules` so `import footprint._lib.core` works.
fn set_path(m: &Bound<'_, PyModule>, path: &str, module: &str) -> PyResult<()> {
    let submodule = m.getattr(module)?;
    m.py()
        .import_bound("sys")?
        .getattr("modules")?
        .set_item(path, submodule)
}
