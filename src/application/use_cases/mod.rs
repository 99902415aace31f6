/// Use cases module containing application business logic orchestration
mod convert_sbom;

pub use convert_sbom::ConvertSbomUseCase;
