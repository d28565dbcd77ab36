use super::common::*;
use crate::history::domain::{CheckInId, CheckInRecord};
use crate::history::repository::{CheckInRepository, RepositoryError};
use crate::history::{CheckInHistoryService, HistoryServiceError};
use crate::config::HistoryConfig;
use std::sync::Arc;

#[test]
fn record_assigns_sequential_ids() {
    let (service, repository) = build_service();

    let first = service
        .record_at(responses("4", "2", ""), at(1))
        .expect("first check-in stored");
    let second = service
        .record_at(responses("2", "4", ""), at(2))
        .expect("second check-in stored");

    assert_eq!(first.id.as_str(), "checkin-000001");
    assert_eq!(second.id.as_str(), "checkin-000002");
    assert_eq!(repository.len(), 2);
}

#[test]
fn list_returns_newest_first() {
    let (service, _) = build_service();
    service.record_at(responses("3", "3", ""), at(5)).expect("stored");
    service.record_at(responses("3", "3", ""), at(2)).expect("stored");
    service.record_at(responses("3", "3", ""), at(9)).expect("stored");

    let days: Vec<String> = service
        .list()
        .expect("list succeeds")
        .iter()
        .map(|record| record.timestamp.format("%d").to_string())
        .collect();
    assert_eq!(days, vec!["09", "05", "02"]);
}

#[test]
fn get_propagates_not_found() {
    let (service, _) = build_service();
    match service.get(&CheckInId("checkin-999999".to_string())) {
        Err(HistoryServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn delete_and_clear_remove_records() {
    let (service, repository) = build_service();
    let kept = service.record_at(responses("3", "3", ""), at(1)).expect("stored");
    let dropped = service.record_at(responses("3", "3", ""), at(2)).expect("stored");

    service.delete(&dropped.id).expect("delete succeeds");
    assert!(repository.fetch(&dropped.id).expect("fetch").is_none());
    assert!(repository.fetch(&kept.id).expect("fetch").is_some());

    assert!(matches!(
        service.delete(&dropped.id),
        Err(HistoryServiceError::Repository(RepositoryError::NotFound))
    ));

    assert_eq!(service.clear().expect("clear succeeds"), 1);
    assert_eq!(repository.len(), 0);
}

#[test]
fn history_limit_evicts_oldest_records() {
    let (service, _) = build_service_with_limit(2);
    let oldest = service.record_at(responses("1", "3", ""), at(1)).expect("stored");
    service.record_at(responses("2", "3", ""), at(2)).expect("stored");
    service.record_at(responses("5", "3", ""), at(3)).expect("stored");

    let records = service.list().expect("list succeeds");
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|record| record.id != oldest.id));
}

#[test]
fn trend_summarizes_stored_check_ins() {
    let (service, _) = build_service();
    service.record_at(responses("1", "3", ""), at(1)).expect("stored");
    service.record_at(responses("5", "3", ""), at(2)).expect("stored");

    let trend = service.trend().expect("trend builds");
    assert_eq!(trend.total_check_ins, 2);
    assert_eq!(trend.latest_score, 67);
    assert_eq!(trend.average_score, 60);
}

#[test]
fn import_rejects_duplicate_ids() {
    let (service, _) = build_service();
    let record = CheckInRecord {
        id: CheckInId("c-1".to_string()),
        timestamp: at(1),
        responses: responses("3", "3", ""),
    };

    assert_eq!(service.import(vec![record.clone()]).expect("import succeeds"), 1);
    assert!(matches!(
        service.import(vec![record]),
        Err(HistoryServiceError::Repository(RepositoryError::Conflict))
    ));
}

#[test]
fn unavailable_repository_surfaces_errors() {
    let service =
        CheckInHistoryService::new(Arc::new(UnavailableRepository), HistoryConfig::default());
    assert!(matches!(
        service.record(responses("3", "3", "")),
        Err(HistoryServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}

#[test]
fn trend_tolerates_huge_ratings() {
    let (service, _) = build_service();
    service
        .record_at(responses("9000000000000000000", "3", ""), at(1))
        .expect("stored");
    service
        .record_at(responses("9000000000000000000", "3", ""), at(2))
        .expect("stored");

    let trend = service.trend().expect("trend builds");
    assert_eq!(trend.total_check_ins, 2);
    assert_eq!(trend.latest_score, i64::MAX);
    assert_eq!(trend.average_score, i64::MAX);
}

fn imported(id: &str, day: u32) -> CheckInRecord {
    CheckInRecord {
        id: CheckInId(id.to_string()),
        timestamp: at(day),
        responses: responses("3", "3", ""),
    }
}

#[test]
fn import_out_of_order_keeps_newest_records() {
    let (service, _) = build_service_with_limit(2);
    let count = service
        .import(vec![imported("c3", 3), imported("c2", 2), imported("c1", 1)])
        .expect("import succeeds");
    assert_eq!(count, 3);

    let kept: Vec<String> = service
        .list()
        .expect("list succeeds")
        .iter()
        .map(|record| record.id.to_string())
        .collect();
    assert_eq!(kept, vec!["c3", "c2"]);
}

#[test]
fn conflicting_insert_does_not_evict() {
    let (service, repository) = build_service_with_limit(2);
    service
        .import(vec![imported("c1", 1), imported("c2", 2)])
        .expect("import succeeds");

    assert!(matches!(
        service.import(vec![imported("c2", 5)]),
        Err(HistoryServiceError::Repository(RepositoryError::Conflict))
    ));
    assert_eq!(repository.len(), 2);
    assert!(repository
        .fetch(&CheckInId("c1".to_string()))
        .expect("fetch")
        .is_some());
}
