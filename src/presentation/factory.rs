//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CheckUseCase, GenerateUseCase, RenameUseCase, SyncUseCase};
use crate::domain::naming::IconNamePattern;
use crate::infrastructure::LocalFs;

/// Concrete use cases backed by the local disk
pub type ConcreteRenameUseCase = RenameUseCase<LocalFs>;
pub type ConcreteGenerateUseCase = GenerateUseCase<LocalFs>;
pub type ConcreteSyncUseCase = SyncUseCase<LocalFs>;
pub type ConcreteCheckUseCase = CheckUseCase<LocalFs>;

pub fn create_rename_use_case(pattern: IconNamePattern) -> ConcreteRenameUseCase {
    RenameUseCase::new(LocalFs::new(), pattern)
}

pub fn create_generate_use_case(pattern: &IconNamePattern) -> ConcreteGenerateUseCase {
    GenerateUseCase::new(LocalFs::new(), pattern.extension())
}

pub fn create_sync_use_case(pattern: IconNamePattern) -> ConcreteSyncUseCase {
    SyncUseCase::new(LocalFs::new(), pattern)
}

pub fn create_check_use_case(pattern: IconNamePattern) -> ConcreteCheckUseCase {
    CheckUseCase::new(LocalFs::new(), pattern)
}
