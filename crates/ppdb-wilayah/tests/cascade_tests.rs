use ppdb_wilayah::{FetchTicket, Level, Region, RegionCascade, StaticSource};

fn region(code: &str, name: &str) -> Region {
    Region {
        code: code.into(),
        name: name.into(),
    }
}

#[tokio::test]
async fn selecting_a_province_clears_everything_downstream() {
    let source = StaticSource::bundled();
    let mut cascade = RegionCascade::new();
    cascade.load_provinces(&source).await;

    cascade.choose_province(&source, "35").await;
    cascade.choose_regency(&source, "3524").await;
    cascade.choose_district(&source, "352411").await;
    cascade.select_village("3524110001");
    assert_eq!(cascade.kode_pos(), Some("62212"));
    assert!(cascade.postal_locked());

    cascade.choose_province(&source, "33").await;
    let selection = cascade.selection();
    assert_eq!(selection.province.as_deref(), Some("33"));
    assert_eq!(selection.regency, None);
    assert_eq!(selection.district, None);
    assert_eq!(selection.village, None);
    assert_eq!(cascade.kode_pos(), None);
    assert!(!cascade.postal_locked());
    assert!(cascade.districts().is_empty());
    assert!(cascade.villages().is_empty());
    assert!(cascade.regencies().iter().all(|r| r.code.starts_with("33")));
}

#[tokio::test]
async fn village_without_postal_code_leaves_the_field_editable() {
    let source = StaticSource::bundled();
    let mut cascade = RegionCascade::new();
    cascade.choose_province(&source, "35").await;
    cascade.choose_regency(&source, "3524").await;
    cascade.choose_district(&source, "352411").await;

    cascade.select_village("3524110001");
    assert_eq!(cascade.kode_pos(), Some("62212"));
    assert!(cascade.postal_locked());

    cascade.select_village("3524110003");
    assert_eq!(cascade.kode_pos(), None);
    assert!(!cascade.postal_locked());
}

#[test]
fn superseded_fetch_results_are_discarded() {
    let mut cascade = RegionCascade::new();
    let stale = cascade.select_province("35");
    // The user changes their mind before the first fetch resolves.
    let fresh = cascade.select_province("33");

    let applied = cascade.apply_regencies(&stale, Ok(vec![region("3524", "KAB. LAMONGAN")]));
    assert!(!applied);
    assert!(cascade.regencies().is_empty());
    assert!(cascade.loading().regencies);

    let applied = cascade.apply_regencies(&fresh, Ok(vec![region("3374", "KOTA SEMARANG")]));
    assert!(applied);
    assert_eq!(cascade.regencies().len(), 1);
    assert!(!cascade.loading().regencies);
}

#[test]
fn a_ticket_for_the_wrong_level_never_applies() {
    let mut cascade = RegionCascade::new();
    cascade.select_province("35");
    let ticket = FetchTicket {
        level: Level::District,
        parent: "35".into(),
    };
    assert!(!cascade.apply_regencies(&ticket, Ok(vec![region("3524", "KAB. LAMONGAN")])));
}

#[test]
fn failed_fetches_degrade_to_an_empty_list() {
    let mut cascade = RegionCascade::new();
    let ticket = cascade.select_province("35");
    let outcome = Err(serde_json::from_str::<serde_json::Value>("not json")
        .unwrap_err()
        .into());
    assert!(cascade.apply_regencies(&ticket, outcome));
    assert!(cascade.regencies().is_empty());
    assert!(!cascade.loading().regencies);
}

#[test]
fn selecting_a_regency_keeps_the_upstream_province() {
    let mut cascade = RegionCascade::new();
    let ticket = cascade.select_province("35");
    cascade.apply_regencies(
        &ticket,
        Ok(vec![region("3524", "KAB. LAMONGAN"), region("3578", "KOTA SURABAYA")]),
    );
    cascade.select_regency("3578");
    let selection = cascade.selection();
    assert_eq!(selection.province.as_deref(), Some("35"));
    assert_eq!(selection.regency.as_deref(), Some("3578"));
    assert_eq!(cascade.regencies().len(), 2);
}
