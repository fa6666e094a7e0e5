use phonebook_core::{DirectoryConfig, ErrorCode, QueryFacade, Request};
use serde_json::{json, Value};

fn seeded_facade() -> QueryFacade<phonebook_core::InMemoryPersonStore> {
    QueryFacade::from_config(&DirectoryConfig::default()).unwrap()
}

fn names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|person| person["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn person_count_reports_seeded_records() {
    let facade = seeded_facade();

    let response = facade.execute_json(r#"{"operation":"personCount"}"#);

    assert!(response.is_ok());
    assert_eq!(response.value("personCount"), Some(&json!(3)));
}

#[test]
fn unseeded_facade_starts_empty() {
    let config = DirectoryConfig {
        seed_demo_data: false,
        ..DirectoryConfig::default()
    };
    let facade = QueryFacade::from_config(&config).unwrap();

    assert_eq!(facade.directory().count(), 0);
    let response = facade.execute(Request::AllPersons { phone: None });
    assert_eq!(response.value("allPersons"), Some(&json!([])));
}

#[test]
fn all_persons_filters_by_phone_presence() {
    let facade = seeded_facade();

    let yes = facade.execute_json(r#"{"operation":"allPersons","phone":"YES"}"#);
    let no = facade.execute_json(r#"{"operation":"allPersons","phone":"NO"}"#);
    let all = facade.execute_json(r#"{"operation":"allPersons"}"#);

    assert_eq!(
        names(yes.value("allPersons").unwrap()),
        vec!["Juan Pablo", "Pedro Cruz"]
    );
    assert_eq!(names(no.value("allPersons").unwrap()), vec!["Micha Gagabo-an"]);
    assert_eq!(names(all.value("allPersons").unwrap()).len(), 3);
}

#[test]
fn find_person_includes_composed_address_and_null_phone() {
    let facade = seeded_facade();

    let response = facade.execute_json(r#"{"operation":"findPerson","name":"Micha Gagabo-an"}"#);

    assert_eq!(
        response.value("findPerson"),
        Some(&json!({
            "name": "Micha Gagabo-an",
            "phone": null,
            "address": { "street": "Adalla Street", "city": "Makati" },
            "id": "3d599471-3436-11e9-bc57-8b80ba54c431"
        }))
    );
}

#[test]
fn find_unknown_person_is_null_data_not_error() {
    let facade = seeded_facade();

    let response = facade.execute_json(r#"{"operation":"findPerson","name":"Alexander Cruz"}"#);

    assert!(response.is_ok());
    assert_eq!(response.value("findPerson"), Some(&Value::Null));
    assert_eq!(
        serde_json::from_str::<Value>(&response.to_json_string()).unwrap(),
        json!({ "data": { "findPerson": null } })
    );
}

#[test]
fn add_person_returns_created_record() {
    let facade = seeded_facade();

    let response = facade.execute_json(
        r#"{"operation":"addPerson","name":"Ana Reyes","street":"Rizal Avenue","city":"Manila"}"#,
    );

    let created = response.value("addPerson").unwrap();
    assert_eq!(created["name"], "Ana Reyes");
    assert!(created["phone"].is_null());
    assert_eq!(created["address"]["street"], "Rizal Avenue");
    assert_eq!(created["address"]["city"], "Manila");
    assert!(uuid::Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
    assert_eq!(facade.directory().count(), 4);
}

#[test]
fn duplicate_add_reports_bad_user_input_with_offending_name() {
    let facade = seeded_facade();

    let response = facade.execute(Request::AddPerson {
        name: "Juan Pablo".to_string(),
        phone: Some("000".to_string()),
        street: "Elsewhere".to_string(),
        city: "Cavite".to_string(),
    });

    assert_eq!(response.value("addPerson"), Some(&Value::Null));
    assert_eq!(response.errors.len(), 1);
    let error = &response.errors[0];
    assert_eq!(error.message, "Name must be unique");
    assert_eq!(error.extensions.code, ErrorCode::BadUserInput);
    assert_eq!(error.extensions.invalid_args, Some(json!("Juan Pablo")));

    let wire: Value = serde_json::from_str(&response.to_json_string()).unwrap();
    assert_eq!(wire["data"], json!({ "addPerson": null }));
    assert_eq!(wire["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
    assert_eq!(wire["errors"][0]["extensions"]["invalidArgs"], "Juan Pablo");
    assert_eq!(facade.directory().count(), 3);
}

#[test]
fn edit_number_unknown_is_null_and_known_updates_phone() {
    let facade = seeded_facade();

    let missing = facade.execute_json(r#"{"operation":"editNumber","name":"Nobody","phone":"1"}"#);
    assert!(missing.is_ok());
    assert_eq!(missing.value("editNumber"), Some(&Value::Null));

    let updated =
        facade.execute_json(r#"{"operation":"editNumber","name":"Juan Pablo","phone":"111-2222"}"#);
    assert_eq!(updated.value("editNumber").unwrap()["phone"], "111-2222");

    let found = facade.execute_json(r#"{"operation":"findPerson","name":"Juan Pablo"}"#);
    assert_eq!(found.value("findPerson").unwrap()["phone"], "111-2222");
}

#[test]
fn malformed_requests_fail_validation_without_touching_store() {
    let facade = seeded_facade();

    for raw in [
        "not json",
        r#"{"operation":"dropAll"}"#,
        r#"{"operation":"allPersons","phone":"MAYBE"}"#,
        r#"{"operation":"addPerson","name":"X","street":"S"}"#,
        r#"{"operation":"editNumber","name":"Juan Pablo","phone":12}"#,
        r#"{"operation":"personCount","bogus":1}"#,
        r#"{"operation":"allPersons","phones":"NO"}"#,
        r#"{"operation":"addPerson","name":"X","phoen":"555","street":"S","city":"C"}"#,
        r#"{"operation":"editNumber","name":"Juan Pablo","phone":"1","city":"C"}"#,
    ] {
        let response = facade.execute_json(raw);
        assert!(response.data.is_none(), "{raw} should not produce data");
        assert_eq!(
            response.errors[0].extensions.code,
            ErrorCode::ValidationFailed,
            "{raw} should fail validation"
        );
        assert!(response.errors[0].extensions.invalid_args.is_none());
    }

    assert_eq!(facade.directory().count(), 3);
    assert_eq!(
        facade.directory().find("Juan Pablo").unwrap().phone.as_deref(),
        Some("999-1231543")
    );
}
