use actix_web::{http::StatusCode, test, web, App};

use quizgen_server::{app_state::AppState, config::Config, handlers};

const SOURCE_TEXT: &str = "The government announced a new taxation policy in the parliament. \
     The decision faced criticism from the opposition. \
     Many citizens joined a demonstration in the capital. \
     The organization published information about the education budget.";

fn test_state() -> web::Data<AppState> {
    // from_env falls back to defaults when nothing is set
    web::Data::new(AppState::new(Config::from_env()))
}

macro_rules! quiz_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .service(handlers::health_check)
                .service(handlers::generate_quiz)
                .service(handlers::get_quiz)
                .service(handlers::record_answer)
                .service(handlers::submit_quiz)
                .service(handlers::extract_document),
        )
        .await
    };
}

#[actix_web::test]
async fn generate_answer_submit_round_trip() {
    let state = test_state();
    let app = quiz_app!(state);

    // generate
    let req = test::TestRequest::post()
        .uri("/api/quiz/generate")
        .set_json(serde_json::json!({ "text": SOURCE_TEXT, "question_count": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let view: serde_json::Value = test::read_body_json(resp).await;
    let questions = view["questions"].as_array().unwrap().clone();
    assert_eq!(questions.len(), 3);

    // answer every question with its first option
    for question in &questions {
        let index = question["index"].as_u64().unwrap();
        let option = question["options"][0].as_str().unwrap();
        let req = test::TestRequest::post()
            .uri("/api/quiz/answers")
            .set_json(serde_json::json!({ "question_index": index, "option": option }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // submit and check the report is internally consistent
    let req = test::TestRequest::post().uri("/api/quiz/submit").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let report: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(report["total"], 3);

    let results = report["results"].as_array().unwrap();
    let correct_count = results
        .iter()
        .filter(|r| r["correct"].as_bool().unwrap())
        .count();
    assert_eq!(report["score"].as_u64().unwrap() as usize, correct_count);

    for (result, question) in results.iter().zip(&questions) {
        let selected = result["selected"].as_str().unwrap();
        assert_eq!(selected, question["options"][0].as_str().unwrap());
        let answer = result["answer"].as_str().unwrap();
        assert_eq!(
            result["correct"].as_bool().unwrap(),
            selected == answer,
            "correctness flag must match the revealed answer"
        );
    }
}

#[actix_web::test]
async fn quiz_view_reflects_each_phase() {
    let state = test_state();
    let app = quiz_app!(state);

    // idle before any generation
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/quiz").to_request()).await;
    let view: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(view["phase"], "Idle");

    // active after generation, with no report attached
    let req = test::TestRequest::post()
        .uri("/api/quiz/generate")
        .set_json(serde_json::json!({ "text": SOURCE_TEXT, "question_count": 2 }))
        .to_request();
    test::call_service(&app, req).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/quiz").to_request()).await;
    let view: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(view["phase"], "Active");
    assert!(view.get("report").is_none());

    // graded after submit, with the report embedded in the view
    test::call_service(&app, test::TestRequest::post().uri("/api/quiz/submit").to_request())
        .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/quiz").to_request()).await;
    let view: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(view["phase"], "Graded");
    assert_eq!(view["report"]["total"], 2);
}

#[actix_web::test]
async fn submitting_twice_is_rejected() {
    let state = test_state();
    let app = quiz_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/quiz/generate")
        .set_json(serde_json::json!({ "text": SOURCE_TEXT }))
        .to_request();
    test::call_service(&app, req).await;

    let resp =
        test::call_service(&app, test::TestRequest::post().uri("/api/quiz/submit").to_request())
            .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp =
        test::call_service(&app, test::TestRequest::post().uri("/api/quiz/submit").to_request())
            .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn extracted_text_feeds_straight_into_generation() {
    let state = test_state();
    let app = quiz_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/documents/extract")
        .insert_header(("Content-Type", "text/plain"))
        .set_payload(SOURCE_TEXT)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let extracted: serde_json::Value = test::read_body_json(resp).await;
    let text = extracted["text"].as_str().unwrap().to_string();
    assert_eq!(
        extracted["character_count"].as_u64().unwrap() as usize,
        text.chars().count()
    );

    let req = test::TestRequest::post()
        .uri("/api/quiz/generate")
        .set_json(serde_json::json!({ "text": text, "question_count": 2 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let view: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(view["questions"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn malformed_generate_requests_are_bad_requests() {
    let state = test_state();
    let app = quiz_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/quiz/generate")
        .set_json(serde_json::json!({ "text": SOURCE_TEXT, "question_count": 0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
