//! Context capability reporting
//!
//! Queries a fixed table of context and driver parameters and writes them to
//! the debug log, followed by every supported extension.

use gl::types::GLenum;

use crate::debug_log;
use crate::foundation::logging::DebugLog;
use crate::render::api::GraphicsApi;

/// One queryable context parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// GL enum passed to the query
    pub id: GLenum,
    /// Name written to the log
    pub name: &'static str,
}

macro_rules! param {
    ($id:ident) => {
        Parameter { id: gl::$id, name: concat!("GL_", stringify!($id)) }
    };
}

/// Parameters with a string value
pub const STRING_PARAMETERS: [Parameter; 4] = [
    param!(VENDOR),
    param!(RENDERER),
    param!(VERSION),
    param!(SHADING_LANGUAGE_VERSION),
];

/// Parameters with a single integer value
pub const INTEGER_PARAMETERS: [Parameter; 15] = [
    param!(MAJOR_VERSION),
    param!(MINOR_VERSION),
    param!(MAX_ELEMENTS_VERTICES),
    param!(MAX_ELEMENTS_INDICES),
    param!(MAX_GEOMETRY_OUTPUT_VERTICES),
    param!(MAX_COMBINED_TEXTURE_IMAGE_UNITS),
    param!(MAX_CUBE_MAP_TEXTURE_SIZE),
    param!(MAX_DRAW_BUFFERS),
    param!(MAX_FRAGMENT_UNIFORM_COMPONENTS),
    param!(MAX_TEXTURE_IMAGE_UNITS),
    param!(MAX_TEXTURE_SIZE),
    param!(MAX_VARYING_FLOATS),
    param!(MAX_VERTEX_ATTRIBS),
    param!(MAX_VERTEX_TEXTURE_IMAGE_UNITS),
    param!(MAX_VERTEX_UNIFORM_COMPONENTS),
];

/// Parameters with a two-integer value
pub const INTEGER_PAIR_PARAMETERS: [Parameter; 1] = [param!(MAX_VIEWPORT_DIMS)];

/// Parameters with a boolean value
pub const BOOLEAN_PARAMETERS: [Parameter; 1] = [param!(STEREO)];

/// Separator between the parameter table and the extension list
pub const SECTION_SEPARATOR: &str = "-----------------------------";

/// Write the parameter table and the extension list to `log`
pub fn report<G: GraphicsApi + ?Sized>(api: &G, log: &DebugLog) {
    debug_log!(log, "GL version information and context parameters:");

    for param in &STRING_PARAMETERS {
        let value = api.get_string(param.id).unwrap_or_else(|| "<unavailable>".to_string());
        debug_log!(log, param.name, value);
    }

    for param in &INTEGER_PARAMETERS {
        debug_log!(log, param.name, api.get_integer(param.id));
    }

    for param in &INTEGER_PAIR_PARAMETERS {
        let [first, second] = api.get_integer_pair(param.id);
        debug_log!(log, param.name, first, second);
    }

    for param in &BOOLEAN_PARAMETERS {
        // Logged as 0/1 like the integer parameters
        debug_log!(log, param.name, u8::from(api.get_boolean(param.id)));
    }

    debug_log!(log, SECTION_SEPARATOR);

    let count = api.extension_count();
    for index in 0..count {
        let name = api.extension(index).unwrap_or_else(|| "<unavailable>".to_string());
        debug_log!(log, format!("{}:", index + 1), name);
    }

    log::info!("Logged {} context parameters and {} extensions", parameter_count(), count);
}

/// Total number of entries in the parameter table
pub const fn parameter_count() -> usize {
    STRING_PARAMETERS.len()
        + INTEGER_PARAMETERS.len()
        + INTEGER_PAIR_PARAMETERS.len()
        + BOOLEAN_PARAMETERS.len()
}
