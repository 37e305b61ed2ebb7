pub mod decode;
pub mod groups;
pub mod list;
pub mod mask;
pub mod validate;
