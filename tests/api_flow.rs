//! HTTP 端到端测试，使用内存 SQLite

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use assignease_server::config::AppConfig;
use assignease_server::routes;
use assignease_server::storage::{SeaOrmStorage, Storage};
use assignease_server::utils::{json_error_handler, path_error_handler, query_error_handler};

const PASSWORD: &str = "s3cret-pass";

macro_rules! test_app {
    () => {{
        let storage: Arc<dyn Storage> = Arc::new(
            SeaOrmStorage::connect(":memory:", &AppConfig::get().database)
                .await
                .expect("in-memory database should open"),
        );
        test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .app_data(web::Data::new(storage))
                .configure(routes::configure_routes),
        )
        .await
    }};
}

// 发送请求，返回状态码与 JSON 响应体（无响应体时为 null）
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        let json: Value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).expect("response body should be JSON")
        };
        (status, json)
    }};
}

fn register_request(username: &str, role: &str) -> test::TestRequest {
    let mut body = json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": PASSWORD,
        "role": role,
        "name": format!("{username} full name"),
    });
    if role == "student" {
        body["enrollment_number"] = json!(format!("EN-{username}"));
    } else {
        body["tid"] = json!(format!("T-{username}"));
    }
    test::TestRequest::post().uri("/register/").set_json(body)
}

fn login_request(username: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/token/")
        .set_json(json!({ "username": username, "password": PASSWORD }))
}

fn authed(req: test::TestRequest, token: &str) -> test::TestRequest {
    req.insert_header(("Authorization", format!("Bearer {token}")))
}

// 注册并登录，返回 (用户 ID, access token)
macro_rules! sign_up {
    ($app:expr, $username:expr, $role:expr) => {{
        let (status, body) = send!($app, register_request($username, $role));
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        let user_id = body["user"]["id"].as_i64().expect("user id");
        let (status, body) = send!($app, login_request($username));
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        let access = body["access"].as_str().expect("access token").to_string();
        (user_id, access)
    }};
}

#[actix_web::test]
async fn test_register_and_login_returns_role() {
    let app = test_app!();

    let (status, body) = send!(app, register_request("teacher1", "teacher"));
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["username"], "teacher1");
    assert_eq!(body["user"]["email"], "teacher1@example.com");
    assert!(body["user"].get("password").is_none());

    let (status, body) = send!(app, login_request("teacher1"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "teacher");
    assert!(body["access"].is_string());
    assert!(body["refresh"].is_string());

    // refresh token 换取新的 access token
    let refresh = body["refresh"].as_str().unwrap().to_string();
    let access = body["access"].as_str().unwrap().to_string();
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/token/refresh/")
            .set_json(json!({ "refresh": refresh }))
    );
    assert_eq!(status, StatusCode::OK);
    assert!(body["access"].is_string());

    // access token 不能用于刷新
    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/token/refresh/")
            .set_json(json!({ "refresh": access }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_registration_validation() {
    let app = test_app!();

    send!(app, register_request("taken", "student"));

    // 用户名重复
    let (status, body) = send!(app, register_request("taken", "student"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("username"));

    // 非法角色
    let (status, _) = send!(
        app,
        test::TestRequest::post().uri("/register/").set_json(json!({
            "username": "admin",
            "email": "admin@example.com",
            "password": PASSWORD,
            "role": "admin",
            "name": "Admin",
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 用户名包含非法字符
    let (status, _) = send!(
        app,
        test::TestRequest::post().uri("/register/").set_json(json!({
            "username": "bad name",
            "email": "bad@example.com",
            "password": PASSWORD,
            "role": "student",
            "name": "Bad",
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_bad_credentials_and_missing_token() {
    let app = test_app!();
    send!(app, register_request("student1", "student"));

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/token/")
            .set_json(json!({ "username": "student1", "password": "wrong" }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["detail"].is_string());

    let (status, _) = send!(app, test::TestRequest::get().uri("/classes/"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send!(
        app,
        authed(test::TestRequest::get().uri("/classes/"), "not-a-token")
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_classroom_flow() {
    let app = test_app!();
    let (teacher_id, teacher) = sign_up!(app, "teacher", "teacher");
    let (student_id, student) = sign_up!(app, "student", "student");
    let (other_id, other) = sign_up!(app, "other", "student");

    // 教师创建班级
    let (status, class) = send!(
        app,
        authed(test::TestRequest::post().uri("/classes/"), &teacher)
            .set_json(json!({ "class_name": "Intro to Python" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(class["teacher"], teacher_id);
    let class_id = class["id"].as_i64().unwrap();

    // 没有作业的班级返回 404
    let (status, _) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/assignment-details/{class_id}/")),
            &teacher
        )
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 学生加入班级，重复加入返回 400
    let join = json!({ "student": student_id, "class_assigned": class_id });
    let (status, enrollment) = send!(
        app,
        authed(test::TestRequest::post().uri("/classstudents/"), &student).set_json(&join)
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(enrollment["class_name"], "Intro to Python");
    assert_eq!(enrollment["student_name"], "student full name");
    let (status, _) = send!(
        app,
        authed(test::TestRequest::post().uri("/classstudents/"), &student).set_json(&join)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, joined) = send!(
        app,
        authed(test::TestRequest::get().uri("/joined-classes/"), &student)
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(joined[0]["class_assigned"], "Intro to Python");

    let (status, roster) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/class/{class_id}/students/")),
            &teacher
        )
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roster.as_array().unwrap().len(), 1);
    assert_eq!(roster[0]["enrollment_number"], "EN-student");

    // 语言、作业与题目
    let (status, language) = send!(
        app,
        authed(test::TestRequest::post().uri("/programminglanguages/"), &teacher)
            .set_json(json!({ "language_name": "Python" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let language_id = language["id"].as_i64().unwrap();

    let (status, assignment) = send!(
        app,
        authed(test::TestRequest::post().uri("/assignments/"), &teacher).set_json(json!({
            "class_assigned": class_id,
            "title": "Loops",
            "description": "Practice for and while loops",
            "due_date": "2026-12-31",
            "language": language_id,
        }))
    );
    assert_eq!(status, StatusCode::CREATED, "{assignment}");
    assert_eq!(assignment["teacher"], teacher_id);
    assert_eq!(assignment["language_name"], "Python");
    assert_eq!(assignment["is_submitted"], false);
    let assignment_id = assignment["id"].as_i64().unwrap();

    let (status, question) = send!(
        app,
        authed(test::TestRequest::post().uri("/assignmentquestions/"), &teacher).set_json(
            json!({ "assignment": assignment_id, "question_text": "Print 1 to 10" })
        )
    );
    assert_eq!(status, StatusCode::CREATED);
    let question_id = question["id"].as_i64().unwrap();

    // 学生提交
    let submission_body = json!({
        "assignment": assignment_id,
        "question": question_id,
        "code": "for i in range(1, 11): print(i)",
        "status": "submitted",
    });
    let (status, submission) = send!(
        app,
        authed(test::TestRequest::post().uri("/submissions/"), &student)
            .set_json(&submission_body)
    );
    assert_eq!(status, StatusCode::CREATED, "{submission}");
    assert_eq!(submission["student"], student_id);
    assert_eq!(submission["title"], "Loops");
    assert_eq!(submission["subject"], "Intro to Python");
    assert_eq!(submission["questiontext"], "Print 1 to 10");
    let submission_id = submission["id"].as_i64().unwrap();

    // 同一 (student, assignment, question) 不能重复提交
    let (status, body) = send!(
        app,
        authed(test::TestRequest::post().uri("/submissions/"), &student)
            .set_json(&submission_body)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "A record with these values already exists.");

    // 引用不存在的题目
    let (status, body) = send!(
        app,
        authed(test::TestRequest::post().uri("/submissions/"), &other).set_json(json!({
            "assignment": assignment_id,
            "question": 9999,
            "code": "print()",
            "status": "submitted",
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Referenced object does not exist.");

    let (status, rows) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/submissions/student/{student_id}/")),
            &teacher
        )
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["status"], "submitted");

    let (status, _) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/submissions/student/{other_id}/")),
            &teacher
        )
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    // is_submitted 针对 ?student_id=
    let (_, detail) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!(
                "/assignment_details/{assignment_id}/?student_id={student_id}"
            )),
            &student
        )
    );
    assert_eq!(detail["is_submitted"], true);
    assert_eq!(detail["questions"][0]["question_text"], "Print 1 to 10");
    let (_, detail) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!(
                "/assignment_details/{assignment_id}/?student_id={other_id}"
            )),
            &student
        )
    );
    assert_eq!(detail["is_submitted"], false);

    let (status, assignments) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/student_assignments/{student_id}/")),
            &student
        )
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assignments[0]["is_submitted"], true);

    let (status, by_question) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/assignment-by-question/{question_id}/")),
            &teacher
        )
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_question["id"], assignment_id);

    // 状态更新
    let status_uri = format!("/submissions/{submission_id}/update-status/");
    let (status, body) = send!(
        app,
        authed(test::TestRequest::patch().uri(&status_uri), &teacher)
            .set_json(json!({ "status": "graded" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid status");
    let (status, body) = send!(
        app,
        authed(test::TestRequest::patch().uri(&status_uri), &teacher)
            .set_json(json!({ "status": "checked" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detail"], "Submission status updated successfully");
    let (status, _) = send!(
        app,
        authed(
            test::TestRequest::patch().uri("/submissions/9999/update-status/"),
            &teacher
        )
        .set_json(json!({ "status": "checked" }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 提交不存在时，无论请求体如何都先返回 404
    let (status, body) = send!(
        app,
        authed(
            test::TestRequest::patch().uri("/submissions/9999/update-status/"),
            &teacher
        )
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Submission not found");
    let (status, _) = send!(
        app,
        authed(
            test::TestRequest::patch().uri("/submissions/9999/update-status/"),
            &teacher
        )
        .set_json(json!({ "status": 5 }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 提交存在时，缺失或非字符串的状态都是无效状态
    let (status, body) = send!(
        app,
        authed(test::TestRequest::patch().uri(&status_uri), &teacher)
            .set_json(json!({ "status": 5 }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid status");
    let (status, body) = send!(
        app,
        authed(test::TestRequest::patch().uri(&status_uri), &teacher)
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid status");

    // 教师反馈，teacher 缺省为当前用户
    let (status, feedback) = send!(
        app,
        authed(test::TestRequest::post().uri("/teacherfeedback/"), &teacher).set_json(json!({
            "submission": submission_id,
            "feedback": "Use range(1, 11) directly",
            "resubmission_requested": true,
        }))
    );
    assert_eq!(status, StatusCode::CREATED, "{feedback}");
    assert_eq!(feedback["teacher"], teacher_id);
    assert_eq!(feedback["submission"], submission_id);
    assert_eq!(feedback["feedback"], "Use range(1, 11) directly");
    assert_eq!(feedback["resubmission_requested"], true);
    assert!(feedback["created_at"].is_string());
    let feedback_id = feedback["id"].as_i64().unwrap();
    let feedback_uri = format!("/teacherfeedback/{feedback_id}/");

    let (status, fetched) = send!(
        app,
        authed(test::TestRequest::get().uri(&feedback_uri), &teacher)
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], feedback_id);
    let (status, updated) = send!(
        app,
        authed(test::TestRequest::patch().uri(&feedback_uri), &teacher)
            .set_json(json!({ "resubmission_requested": false }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["resubmission_requested"], false);
    assert_eq!(updated["feedback"], "Use range(1, 11) directly");

    // 反馈不影响提交本身的 feedback 与状态
    let (_, own) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/submissions/{submission_id}/")),
            &student
        )
    );
    assert_eq!(own["status"], "checked");
    assert!(own["feedback"].is_null());

    let (status, _) = send!(
        app,
        authed(test::TestRequest::delete().uri(&feedback_uri), &teacher)
    );
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send!(
        app,
        authed(test::TestRequest::get().uri(&feedback_uri), &teacher)
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, performance) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/student-performance/{student_id}/")),
            &teacher
        )
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        performance,
        json!({
            "total_assignments": 1,
            "submitted": 1,
            "checked": 1,
            "reassigned": 0,
            "rejected": 0,
        })
    );

    // 教师可见全部提交，其他学生看不到
    let (_, all) = send!(
        app,
        authed(test::TestRequest::get().uri("/submissions/"), &teacher)
    );
    assert_eq!(all.as_array().unwrap().len(), 1);
    let (_, mine) = send!(
        app,
        authed(test::TestRequest::get().uri("/submissions/"), &other)
    );
    assert_eq!(mine, json!([]));
    let (status, _) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/submissions/{submission_id}/")),
            &other
        )
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_class_deletion_requires_owner() {
    let app = test_app!();
    let (_, owner) = sign_up!(app, "owner", "teacher");
    let (_, intruder) = sign_up!(app, "intruder", "teacher");

    let (_, class) = send!(
        app,
        authed(test::TestRequest::post().uri("/classes/"), &owner)
            .set_json(json!({ "class_name": "Algorithms" }))
    );
    let class_id = class["id"].as_i64().unwrap();
    let delete_uri = format!("/classes/{class_id}/delete/");

    let (status, body) = send!(
        app,
        authed(test::TestRequest::delete().uri(&delete_uri), &intruder)
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["detail"], "You are not authorized to delete this class.");

    // 其他教师的班级在通用接口中不可见
    let (status, _) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/classes/{class_id}/")),
            &intruder
        )
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, listed) = send!(
        app,
        authed(test::TestRequest::get().uri("/classes/"), &intruder)
    );
    assert_eq!(listed, json!([]));

    // 任何人都能查看简要信息
    let (status, simple) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/class/simple/{class_id}/")),
            &intruder
        )
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(simple, json!({ "id": class_id, "class_name": "Algorithms" }));

    let (status, body) = send!(
        app,
        authed(test::TestRequest::delete().uri(&delete_uri), &owner)
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Class deleted successfully.");

    let (status, _) = send!(
        app,
        authed(test::TestRequest::delete().uri(&delete_uri), &owner)
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 不检查班级是否存在的学生列表返回空数组
    let (status, body) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/classstudents/{class_id}/students/")),
            &owner
        )
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    let (status, _) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/class/{class_id}/students/")),
            &owner
        )
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_profiles_are_scoped_to_owner() {
    let app = test_app!();
    let (teacher_id, teacher) = sign_up!(app, "prof", "teacher");
    let (student_id, student) = sign_up!(app, "pupil", "student");

    let (status, profiles) = send!(
        app,
        authed(test::TestRequest::get().uri("/profiles/"), &student)
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profiles.as_array().unwrap().len(), 1);
    assert_eq!(profiles[0]["user"], student_id);
    assert_eq!(profiles[0]["username"], "pupil");
    let profile_id = profiles[0]["id"].as_i64().unwrap();

    let (status, updated) = send!(
        app,
        authed(
            test::TestRequest::patch().uri(&format!("/profiles/{profile_id}/")),
            &student
        )
        .set_json(json!({ "name": "Renamed Pupil" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Renamed Pupil");
    assert_eq!(updated["enrollment_number"], "EN-pupil");

    let (status, _) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/profiles/{profile_id}/")),
            &teacher
        )
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 按用户 ID 查询任意资料
    let (status, body) = send!(
        app,
        authed(
            test::TestRequest::get().uri(&format!("/student/{teacher_id}/")),
            &student
        )
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tid"], "T-prof");
    let (status, body) = send!(
        app,
        authed(test::TestRequest::get().uri("/student/9999/"), &student)
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Student not found");
}

#[actix_web::test]
async fn test_user_crud_and_invalid_path_id() {
    let app = test_app!();
    let (_, token) = sign_up!(app, "manager", "teacher");

    let (status, created) = send!(
        app,
        authed(test::TestRequest::post().uri("/users/"), &token).set_json(json!({
            "username": "plain",
            "email": "plain@example.com",
            "password": "pw",
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("password").is_none());
    let user_id = created["id"].as_i64().unwrap();

    // 没有 Profile 的用户登录时 role 为 null
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/token/")
            .set_json(json!({ "username": "plain", "password": "pw" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], Value::Null);

    let (status, updated) = send!(
        app,
        authed(
            test::TestRequest::put().uri(&format!("/users/{user_id}/")),
            &token
        )
        .set_json(json!({ "email": "renamed@example.com" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["email"], "renamed@example.com");
    assert_eq!(updated["username"], "plain");

    let (status, body) = send!(
        app,
        authed(
            test::TestRequest::delete().uri(&format!("/users/{user_id}/")),
            &token
        )
    );
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    // 非数字或非正数的 ID 按不存在处理
    for uri in ["/users/abc/", "/users/0/", "/classes/-1/"] {
        let (status, body) = send!(app, authed(test::TestRequest::get().uri(uri), &token));
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["detail"], "Not found.");
    }
}
