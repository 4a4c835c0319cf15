//! End-to-end tests across the blocksync crates
//!
//! These exercise the complete flow: manifest loading -> block extraction ->
//! relabel -> substitution -> atomic write -> report.

use blocksync_blocks::{Anchoring, BlockMarkers, Label, extract_block, has_block};
use blocksync_core::{
    DEFAULT_CONFIG_FILE, Error, Outcome, SyncEngine, SyncJob, SyncManifest, SyncOptions,
    SyncReport,
};
use blocksync_fs::{NormalizedPath, compute_content_checksum};
use blocksync_test_utils::TestWorkspace;
use blocksync_test_utils::pages::{
    ADMIN_PAGE, ADMIN_PAGE_PATH, AGENT_PAGE, AGENT_PAGE_PATH, AGENT_PAGE_SYNCED,
    AGENT_PAGE_WITHOUT_BLOCK,
};
use pretty_assertions::assert_eq;

const SECOND_TARGET: &str = "frontend/src/pages/partner/PartnerDashboardPage.jsx";

/// Manifest fanning the admin form out to two dashboards.
fn fan_out_manifest() -> SyncManifest {
    let partner = SyncJob {
        name: "partner-form".to_string(),
        target: SECOND_TARGET.to_string(),
        ..SyncJob::vehicle_form()
    };
    SyncManifest {
        jobs: vec![SyncJob::vehicle_form(), partner],
    }
}

#[test]
fn test_manifest_file_drives_every_job() {
    let ws = TestWorkspace::with_dashboard_pages();
    ws.write(SECOND_TARGET, AGENT_PAGE);

    let config = NormalizedPath::new(ws.path(DEFAULT_CONFIG_FILE));
    fan_out_manifest().save(&config).unwrap();

    let manifest = SyncManifest::load(&config).unwrap();
    let reports = SyncEngine::new(ws.root())
        .run_all(&manifest, &SyncOptions::default())
        .unwrap();

    let outcomes: Vec<Outcome> = reports.iter().map(|r| r.outcome).collect();
    assert_eq!(outcomes, vec![Outcome::Updated, Outcome::Updated]);
    ws.assert_file_eq(AGENT_PAGE_PATH, AGENT_PAGE_SYNCED);
    ws.assert_file_eq(SECOND_TARGET, AGENT_PAGE_SYNCED);
    ws.assert_file_eq(ADMIN_PAGE_PATH, ADMIN_PAGE);
}

#[test]
fn test_repeated_runs_converge() {
    let ws = TestWorkspace::with_dashboard_pages();
    ws.write(SECOND_TARGET, AGENT_PAGE);
    let engine = SyncEngine::new(ws.root());
    let manifest = fan_out_manifest();

    engine.run_all(&manifest, &SyncOptions::default()).unwrap();
    let after_first = ws.read(AGENT_PAGE_PATH);

    let reports = engine.run_all(&manifest, &SyncOptions::default()).unwrap();
    assert!(reports.iter().all(|r| r.outcome == Outcome::Unchanged));
    assert!(reports.iter().all(|r| r.checksum_before == r.checksum_after));
    assert_eq!(ws.read(AGENT_PAGE_PATH), after_first);
}

#[test]
fn test_target_missing_does_not_stop_later_jobs() {
    let ws = TestWorkspace::new();
    ws.write(ADMIN_PAGE_PATH, ADMIN_PAGE);
    ws.write(AGENT_PAGE_PATH, AGENT_PAGE_WITHOUT_BLOCK);
    ws.write(SECOND_TARGET, AGENT_PAGE);

    let reports = SyncEngine::new(ws.root())
        .run_all(&fan_out_manifest(), &SyncOptions::default())
        .unwrap();

    assert_eq!(reports[0].outcome, Outcome::TargetBlockMissing);
    assert_eq!(reports[1].outcome, Outcome::Updated);
    ws.assert_file_eq(AGENT_PAGE_PATH, AGENT_PAGE_WITHOUT_BLOCK);
    ws.assert_file_eq(SECOND_TARGET, AGENT_PAGE_SYNCED);
}

#[test]
fn test_source_missing_aborts_before_any_write() {
    let ws = TestWorkspace::new();
    ws.write(ADMIN_PAGE_PATH, "no blocks here\n");
    ws.write(AGENT_PAGE_PATH, AGENT_PAGE);
    ws.write(SECOND_TARGET, AGENT_PAGE);

    let err = SyncEngine::new(ws.root())
        .run_all(&fan_out_manifest(), &SyncOptions::default())
        .unwrap_err();

    assert!(matches!(err, Error::SourceBlockMissing { ref job, .. } if job == "vehicle-form"));
    ws.assert_file_eq(AGENT_PAGE_PATH, AGENT_PAGE);
    ws.assert_file_eq(SECOND_TARGET, AGENT_PAGE);
}

#[test]
fn test_synced_target_holds_source_block_under_new_label() {
    let ws = TestWorkspace::with_dashboard_pages();
    let job = SyncJob::vehicle_form();
    SyncEngine::new(ws.root())
        .run(&job, &SyncOptions::default())
        .unwrap();

    let synced = ws.read(AGENT_PAGE_PATH);
    let source_block = extract_block(ADMIN_PAGE, &job.source_markers()).unwrap();
    let target_block = extract_block(&synced, &job.target_markers()).unwrap();

    let label = job.label.as_ref().unwrap();
    assert_eq!(
        target_block.text,
        source_block.text.replacen(&label.from, &label.to, 1)
    );
    assert!(!has_block(&synced, &job.source_markers()).unwrap());
}

#[test]
fn test_html_job_with_anywhere_anchoring() {
    let ws = TestWorkspace::new();
    ws.write("a.html", "<p>x</p><!-- cta --><a href=\"/buy\">Buy</a><p>y</p>");
    ws.write("b.html", "<div><!-- cta --><a href=\"/old\">Old</a></div>");

    let job = SyncJob {
        name: "cta".to_string(),
        source: "a.html".to_string(),
        target: "b.html".to_string(),
        source_start: "<!-- cta -->".to_string(),
        target_start: Some("<!-- cta".to_string()),
        end: "</a>".to_string(),
        anchoring: Anchoring::Anywhere,
        notes: Vec::new(),
        next_step: None,
        label: Some(Label::new("<!-- cta -->", "<!-- cta (copied) -->")),
    };

    let report = SyncEngine::new(ws.root())
        .run(&job, &SyncOptions::default())
        .unwrap();

    assert_eq!(report.outcome, Outcome::Updated);
    ws.assert_file_eq(
        "b.html",
        "<div><!-- cta (copied) --><a href=\"/buy\">Buy</a></div>",
    );
    assert_eq!(
        report.checksum_after,
        compute_content_checksum(&ws.read("b.html"))
    );
}

#[test]
fn test_reports_serialize_for_scripting() {
    let ws = TestWorkspace::with_dashboard_pages();
    let reports = SyncEngine::new(ws.root())
        .run_all(&SyncManifest::default(), &SyncOptions { dry_run: true })
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&SyncReport::batch_to_json(&reports).unwrap()).unwrap();
    assert_eq!(json[0]["outcome"], "would_update");
    assert_eq!(json[0]["changes"][0]["kind"], "replaced_block");
    assert!(json[0]["diff"]["unified"].as_str().unwrap().contains("Same as Admin"));
    ws.assert_file_eq(AGENT_PAGE_PATH, AGENT_PAGE);
}

#[test]
fn test_block_markers_from_job_match_fixture_layout() {
    let job = SyncJob::vehicle_form();
    let markers: BlockMarkers = job.source_markers();
    let block = extract_block(ADMIN_PAGE, &markers).unwrap();
    assert_eq!((block.start_line, block.end_line), (6, 23));
}
