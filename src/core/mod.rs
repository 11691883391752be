pub mod job;
pub mod pesel;
pub mod report;
pub mod scramble;

pub use crate::domain::model::{
    Gender, PeselDetails, PeselError, ScrambleReport, ValidationResult,
};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
