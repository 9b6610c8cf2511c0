mod compiler;
mod context;
mod style;

pub use compiler::{
    builtin_tag, component_module_path, is_builtin, render_page, RenderError,
};
pub use context::RenderContext;
pub use style::{serialize_styles, to_camel_case};
