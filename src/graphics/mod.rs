// Graphics APIs we can probe. Only OpenGL so far; the capability
// types live with the API they describe.
pub mod gl;
