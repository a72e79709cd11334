//! Platform detection.

pub mod detection;

pub use detection::{
    detect, detect_with, distribution_name, effective_platform, GENERIC_LINUX, OS_RELEASE_PATH,
};
