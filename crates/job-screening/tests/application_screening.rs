//! End-to-end screening scenarios driven through the public intake and evaluator API.

use std::io::Cursor;

use job_screening::screening::{
    AllowListValidator, Applicant, ApplicationEvaluator, ApplicationIntake, ApplicationResult,
    DecisionReason, EvaluationError, IdentityValidator, JobApplication, ValidationMode,
};

const APPLICATIONS_CSV: &str = "\
reference,age,identity_number,tech_stack,years_of_experience
junior,17,AZE0001,C#;RabbitMQ;Microservice;Visual Studio,0
graduate,18,AZE0002,C#;RabbitMQ;Microservice,1
unknown-id,30,AZE9999,C#;RabbitMQ,5
generalist,35,AZE0003,Java;Kafka,12
veteran,55,AZE0004,c#;rabbitmq;microservice;visual studio,20
";

fn trusted_validator() -> AllowListValidator {
    AllowListValidator::new("Azerbaijan").with_trusted([
        "AZE0001", "AZE0002", "AZE0003", "AZE0004",
    ])
}

#[test]
fn csv_batch_is_screened_in_order() {
    let records =
        ApplicationIntake::from_csv_reader(Cursor::new(APPLICATIONS_CSV)).expect("csv parses");
    let mut evaluator = ApplicationEvaluator::new(trusted_validator());

    let decisions: Vec<(String, ApplicationResult)> = records
        .iter()
        .map(|record| {
            let result = evaluator
                .evaluate(&record.application)
                .expect("every row has an applicant");
            (record.reference.clone(), result)
        })
        .collect();

    assert_eq!(
        decisions,
        vec![
            ("junior".to_string(), ApplicationResult::AutoRejected),
            ("graduate".to_string(), ApplicationResult::AutoAccepted),
            ("unknown-id".to_string(), ApplicationResult::TransferredToHr),
            ("generalist".to_string(), ApplicationResult::AutoRejected),
            ("veteran".to_string(), ApplicationResult::AutoAccepted),
        ]
    );
}

#[test]
fn veteran_is_validated_in_detailed_mode() {
    let mut evaluator = ApplicationEvaluator::new(trusted_validator());
    let application = JobApplication::new(Applicant::new(55, "AZE0004"))
        .with_tech_stack(["C#", "RabbitMQ", "Microservice", "Visual Studio"])
        .with_years_of_experience(20);

    let outcome = evaluator.assess(&application).expect("evaluates");

    assert_eq!(outcome.validation_mode, Some(ValidationMode::Detailed));
    assert_eq!(
        evaluator.validator().validation_mode(),
        ValidationMode::Detailed
    );
    assert_eq!(
        outcome.reason,
        DecisionReason::SeniorProfile {
            rate: 100,
            years: 20
        }
    );
}

#[test]
fn detailed_mode_rejects_malformed_trusted_identity() {
    let validator = AllowListValidator::new("Azerbaijan").with_trusted(["AZE-0005"]);
    let mut evaluator = ApplicationEvaluator::new(validator);

    let young = JobApplication::new(Applicant::new(30, "AZE-0005")).with_tech_stack(["C#"]);
    let senior = JobApplication::new(Applicant::new(60, "AZE-0005")).with_tech_stack(["C#"]);

    assert_eq!(
        evaluator.evaluate(&young).expect("evaluates"),
        ApplicationResult::AutoAccepted
    );
    assert_eq!(
        evaluator.evaluate(&senior).expect("evaluates"),
        ApplicationResult::TransferredToHr
    );
}

#[test]
fn validator_for_another_country_routes_everyone_adult_to_cto() {
    let validator = AllowListValidator::new("Georgia").with_trusted(["AZE0002"]);
    let mut evaluator = ApplicationEvaluator::new(validator);

    let outcome = evaluator
        .assess(&JobApplication::new(Applicant::new(18, "AZE0002")))
        .expect("evaluates");

    assert_eq!(outcome.result, ApplicationResult::TransferredToCto);
    assert!(outcome.result.requires_human_review());
}

#[test]
fn json_document_without_applicant_is_refused() {
    let json = r#"[ { "tech_stack": ["C#"], "years_of_experience": 3 } ]"#;
    let records = ApplicationIntake::from_json_reader(Cursor::new(json)).expect("json parses");
    let mut evaluator = ApplicationEvaluator::new(trusted_validator());

    let error = evaluator
        .evaluate(&records[0].application)
        .expect_err("applicant missing");

    assert_eq!(error, EvaluationError::MissingApplicant);
    assert_eq!(error.to_string(), "application has no applicant");
}

#[test]
fn outcome_serializes_for_reporting() {
    let mut evaluator = ApplicationEvaluator::new(trusted_validator());
    let application =
        JobApplication::new(Applicant::new(18, "AZE0002")).with_tech_stack(["C#", "RabbitMQ"]);

    let outcome = evaluator.assess(&application).expect("evaluates");
    let json = serde_json::to_value(&outcome).expect("serializes");

    assert_eq!(json["result"], "auto_accepted");
    assert_eq!(json["reason"]["rule"], "default_acceptance");
    assert_eq!(json["validation_mode"], "quick");
    assert_eq!(json["similarity_rate"], 50);
}
