use safespace::assessment::{
    recovery_plan, score_assessment, summarize, AssessmentAnswers, AssessmentReport,
    StressCategory, StressLevel,
};

#[test]
fn uniform_fours_score_high() {
    let result = score_assessment(&AssessmentAnswers::from_ordered([4; 12]));
    assert_eq!(result.scores.academic, 80);
    assert_eq!(result.scores.emotional, 80);
    assert_eq!(result.scores.social, 80);
    assert_eq!(result.overall_average, 4.0);
    assert_eq!(result.overall, StressLevel::High);
}

#[test]
fn uniform_zeros_score_low() {
    let result = score_assessment(&AssessmentAnswers::from_ordered([0; 12]));
    assert_eq!(result.scores.academic, 0);
    assert_eq!(result.overall_average, 0.0);
    assert_eq!(result.overall, StressLevel::Low);
}

#[test]
fn academic_heavy_answers_are_medium_with_academic_insight() {
    let answers = AssessmentAnswers::from_ordered([4, 4, 4, 4, 2, 2, 2, 2, 2, 2, 2, 2]);
    let result = score_assessment(&answers);

    assert_eq!(result.scores.academic, 80);
    assert_eq!(result.scores.emotional, 40);
    assert_eq!(result.scores.social, 40);
    assert!((result.overall_average - 2.667).abs() < 0.001);
    assert_eq!(result.overall, StressLevel::Medium);

    let summary = summarize(&result);
    assert_eq!(summary.dominant_category, StressCategory::Academic);
    assert_eq!(summary.title, "Moderate Stress Level");
}

#[test]
fn empty_answers_default_to_lowest_stress() {
    let report = AssessmentReport::build(&AssessmentAnswers::new());
    assert_eq!(report.result.overall, StressLevel::Low);
    assert_eq!(report.recovery_plan, recovery_plan(StressLevel::Low));
}

#[test]
fn answers_deserialize_from_id_map() {
    let answers: AssessmentAnswers =
        serde_json::from_str(r#"{"1":4,"5":3,"9":2}"#).expect("answers deserialize");
    assert_eq!(answers.len(), 3);
    assert_eq!(answers.value("5"), 3);
    assert_eq!(answers.value("6"), 0);
    assert!(answers.validate().is_ok());
}

#[test]
fn report_serializes_level_in_lowercase() {
    let report = AssessmentReport::build(&AssessmentAnswers::from_ordered([3; 12]));
    let value = serde_json::to_value(&report).expect("serialize");
    assert_eq!(value["result"]["overall"], "medium");
    assert_eq!(value["result"]["scores"]["social"], 60);
    assert_eq!(value["recovery_plan"]["steps"][0]["day"], 1);
}
