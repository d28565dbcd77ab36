use safespace::history::{build_trend, CheckInCsvImporter};

#[test]
fn imported_history_produces_trend() {
    let csv = "id,timestamp,mood,anxiety,sleep,stress,social,activities,notes\n\
c-3,2025-03-06T20:00:00Z,5,1,5,1,5,5,great day\n\
c-1,2025-03-04T20:00:00Z,1,5,1,5,1,1,exhausted\n\
c-2,2025-03-05T20:00:00Z,3,3,3,3,3,3,\n";

    let records = CheckInCsvImporter::from_reader(csv.as_bytes()).expect("import succeeds");
    assert_eq!(records.len(), 3);

    let trend = build_trend(&records);
    let scores: Vec<i64> = trend.points.iter().map(|point| point.score).collect();
    assert_eq!(scores, vec![20, 60, 100]);
    assert_eq!(trend.latest_score, 100);
    assert_eq!(trend.average_score, 60);
    assert_eq!(trend.points[0].date, "Mar 4");
}
