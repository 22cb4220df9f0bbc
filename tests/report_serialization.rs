use fleetcheck::{check_board, random_board, survey, Fleet, SurveyReport, BOARD_SIZE};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_invalid_report_roundtrip() {
    let report = check_board("**\n**").unwrap();
    let bytes = bincode::serialize(&report).unwrap();
    let decoded: SurveyReport = bincode::deserialize(&bytes).unwrap();
    assert_eq!(report, decoded);
}

proptest! {
    #[test]
    fn survey_report_roundtrip(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        if let Ok(board) = random_board(&mut rng, BOARD_SIZE, &Fleet::standard()) {
            let report = survey(&board, &Fleet::standard());
            let bytes = bincode::serialize(&report).unwrap();
            let decoded: SurveyReport = bincode::deserialize(&bytes).unwrap();
            prop_assert_eq!(report, decoded);
        }
    }
}
