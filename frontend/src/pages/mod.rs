pub mod landing;
pub mod mobile;
pub mod not_found;
