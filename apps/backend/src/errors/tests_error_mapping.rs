// Unit tests for error mapping - pure logic without HTTP or database dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation(ValidationKind::Other("name".into()), "name is empty");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn conflict_maps_to_409() {
    let app = AppError::conflict(ErrorCode::PlayerInUse, "player 7 is rostered".into());
    assert_eq!(app.code().as_str(), "PLAYER_IN_USE");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_rule_graph_failures_to_invalid_rule_set() {
    for kind in [
        ValidationKind::DuplicateRule,
        ValidationKind::UnknownDependency,
        ValidationKind::RuleCycle,
    ] {
        let app: AppError = DomainError::validation(kind, "bad graph").into();
        assert_eq!(app.code(), ErrorCode::InvalidRuleSet);
        assert_eq!(app.status().as_u16(), 422);
    }
}

#[test]
fn maps_not_found() {
    let cases = [
        (NotFoundKind::Game, ErrorCode::GameNotFound),
        (NotFoundKind::Player, ErrorCode::PlayerNotFound),
        (NotFoundKind::Session, ErrorCode::SessionNotFound),
        (NotFoundKind::Step, ErrorCode::StepNotFound),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::not_found(kind, "missing").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status().as_u16(), 404);
    }
}

#[test]
fn maps_infra() {
    let db = DomainError::infra(InfraErrorKind::Db, "connection reset");
    let app: AppError = db.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);

    let corrupt = DomainError::infra(InfraErrorKind::DataCorruption, "dangling assignment");
    let app: AppError = corrupt.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);
    assert!(matches!(app, AppError::DataCorruption { .. }));
}

#[test]
fn db_err_record_not_found_becomes_domain_not_found() {
    let de: DomainError = sea_orm::DbErr::RecordNotFound("Player not found".into()).into();
    assert!(matches!(de, DomainError::NotFound(..)));
}
