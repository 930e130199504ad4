//! Repository-level tests for the leave request state machine

mod common;

use hr_server::db::models::{LeaveRequestCreate, LeaveStatus, LeaveType};
use hr_server::db::repository::{LeaveRequestRepository, RepoError, UserRepository};
use hr_server::db::seed;
use surrealdb::RecordId;

async fn seeded_repos() -> (
    surrealdb::Surreal<surrealdb::engine::local::Db>,
    LeaveRequestRepository,
    UserRepository,
) {
    let db = common::mem_db().await;
    seed::seed_if_empty(&db).await.expect("seed data");
    (
        db.clone(),
        LeaveRequestRepository::new(db.clone()),
        UserRepository::new(db),
    )
}

async fn user_id(users: &UserRepository, username: &str) -> RecordId {
    users
        .find_by_username(username)
        .await
        .expect("query user")
        .expect("seeded user")
        .id
        .expect("persisted user has an id")
}

fn annual_request(start: &str, end: &str) -> LeaveRequestCreate {
    LeaveRequestCreate {
        leave_type: LeaveType::Annual,
        start_date: start.to_string(),
        end_date: end.to_string(),
        reason: "nghi phep nam".to_string(),
    }
}

#[tokio::test]
async fn submitted_request_starts_pending() {
    let (_db, requests, users) = seeded_repos().await;
    let employee = user_id(&users, "nhanvien").await;

    let created = requests
        .create(employee.clone(), annual_request("2024-03-01", "2024-03-05"))
        .await
        .unwrap();

    assert_eq!(created.status, LeaveStatus::Pending);
    assert_eq!(created.user_id, employee);
    assert!(created.id.is_some());
}

#[tokio::test]
async fn pending_list_projects_submitter_name() {
    let (_db, requests, users) = seeded_repos().await;
    let employee = user_id(&users, "nhanvien").await;

    requests
        .create(employee, annual_request("2024-03-01", "2024-03-05"))
        .await
        .unwrap();

    let pending = requests.find_pending().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].full_name.as_deref(), Some("Nguyễn Văn An"));
}

#[tokio::test]
async fn approval_is_final() {
    let (_db, requests, users) = seeded_repos().await;
    let employee = user_id(&users, "nhanvien").await;

    let created = requests
        .create(employee, annual_request("2024-03-01", "2024-03-05"))
        .await
        .unwrap();
    let id = created.id.unwrap().to_string();

    let approved = requests
        .transition(&id, LeaveStatus::Approved)
        .await
        .unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);

    // Decided requests leave the pending list
    assert!(requests.find_pending().await.unwrap().is_empty());

    // Any further decision attempt conflicts
    let again = requests.transition(&id, LeaveStatus::Rejected).await;
    assert!(matches!(again, Err(RepoError::Conflict(_))));

    // State unchanged after the failed attempt
    let stored = requests.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.status, LeaveStatus::Approved);
}

#[tokio::test]
async fn rejection_follows_the_same_machine() {
    let (_db, requests, users) = seeded_repos().await;
    let employee = user_id(&users, "nhanvien").await;

    let created = requests
        .create(employee, annual_request("2024-04-01", "2024-04-02"))
        .await
        .unwrap();
    let id = created.id.unwrap().to_string();

    let rejected = requests
        .transition(&id, LeaveStatus::Rejected)
        .await
        .unwrap();
    assert_eq!(rejected.status, LeaveStatus::Rejected);

    let again = requests.transition(&id, LeaveStatus::Approved).await;
    assert!(matches!(again, Err(RepoError::Conflict(_))));
}

#[tokio::test]
async fn deciding_a_missing_request_is_not_found() {
    let (_db, requests, _users) = seeded_repos().await;

    let result = requests
        .transition("leave_request:doesnotexist", LeaveStatus::Approved)
        .await;
    assert!(matches!(result, Err(RepoError::NotFound(_))));
}

#[tokio::test]
async fn requests_are_scoped_to_their_submitter() {
    let (_db, requests, users) = seeded_repos().await;
    let employee = user_id(&users, "nhanvien").await;
    let supervisor = user_id(&users, "truongbp").await;

    requests
        .create(employee.clone(), annual_request("2024-03-01", "2024-03-05"))
        .await
        .unwrap();
    requests
        .create(supervisor, annual_request("2024-05-01", "2024-05-02"))
        .await
        .unwrap();

    let mine = requests.find_by_user(employee.clone()).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].user_id, employee);
}
