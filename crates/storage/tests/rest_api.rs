use ironlog_domain::{
    Difficulty, Exercise, ExerciseFilter, ExerciseID, ExerciseRepository, Name, ReadError,
    StorageError,
};
use ironlog_storage::{Rest, rest};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bench_press() -> Exercise {
    Exercise {
        id: ExerciseID::from(1),
        name: Name::new("Bench Press").unwrap(),
        category: "strength".to_string(),
        equipment: "barbell".to_string(),
        muscles: vec!["chest".to_string(), "triceps".to_string()],
        body_parts: vec!["upper body".to_string()],
        difficulty: Difficulty::new(4).unwrap(),
        is_compound: true,
        requires_spotter: true,
        is_active: true,
    }
}

#[tokio::test]
async fn test_read_exercises_sends_filter_as_query_parameters() {
    let server = MockServer::start().await;
    let body = rest::ExercisesResponse {
        exercises: vec![rest::Exercise::from(bench_press())],
        total: 1,
    };
    Mock::given(method("GET"))
        .and(path("/api/exercises"))
        .and(query_param("search", "press"))
        .and(query_param("difficultyMin", "3"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "2"))
        .and(query_param("sortBy", "name"))
        .and(query_param("sortDirection", "asc"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let filter = ExerciseFilter {
        search: "press".to_string(),
        difficulty_min: Difficulty::new(3).unwrap(),
        page: 1,
        limit: 2,
        ..ExerciseFilter::default()
    };
    let page = Rest::new(&server.uri())
        .with_token("secret")
        .read_exercises(&filter)
        .await
        .unwrap();

    assert_eq!(page.exercises, vec![bench_press()]);
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn test_read_exercise_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/exercises/00000000-0000-0000-0000-000000000001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rest::Exercise::from(bench_press())))
        .mount(&server)
        .await;

    assert_eq!(
        Rest::new(&server.uri())
            .read_exercise(ExerciseID::from(1))
            .await
            .unwrap(),
        bench_press()
    );
}

#[tokio::test]
async fn test_unauthenticated_request_maps_to_no_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/exercises"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "authentication required"})),
        )
        .mount(&server)
        .await;

    assert_eq!(
        Rest::new(&server.uri())
            .read_exercises(&ExerciseFilter::default())
            .await,
        Err(StorageError::NoSession.into())
    );
}

#[tokio::test]
async fn test_missing_exercise_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"error": "Exercise not found"})),
        )
        .mount(&server)
        .await;

    assert_eq!(
        Rest::new(&server.uri())
            .read_exercise(ExerciseID::from(9))
            .await,
        Err(ReadError::NotFound)
    );
}

#[tokio::test]
async fn test_server_failure_maps_to_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "catalog temporarily unavailable"})),
        )
        .mount(&server)
        .await;

    assert_eq!(
        Rest::new(&server.uri())
            .read_exercises(&ExerciseFilter::default())
            .await,
        Err(StorageError::Upstream("catalog temporarily unavailable".to_string()).into())
    );
}
