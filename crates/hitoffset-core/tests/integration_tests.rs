//! Integration tests for hitoffset-core
//!
//! These tests drive the public API across modules: decoding feeds
//! correlation, correlation feeds the summary, documents and config come
//! from disk.

use hitoffset_core::chart::{HitWindow, Target};
use hitoffset_core::correlate::correlate;
use hitoffset_core::replay::{InputEvent, Keys, Mod, Mods, ReplayFrame, TriggerPolicy, decode_frames};
use hitoffset_core::stats::{Tendency, summarize};
use hitoffset_core::{AnalysisConfig, Analyzer, ChartDocument, Error, ReplayDocument};

fn press(t: f64) -> InputEvent {
    InputEvent {
        timestamp_ms: t,
        keys: Keys::K1,
    }
}

/// Worked examples for the full engine
mod scenario_tests {
    use super::*;

    #[test]
    fn test_no_events_no_matches() {
        let targets = [Target::circle(500.0), Target::slider(900.0)];
        let record = correlate(&[], &targets, &HitWindow::new(5.0, Mods::NONE));
        assert_eq!(record.matched_count, 0);
        assert!(record.offsets_ms.is_empty());
        assert!(summarize(&record.offsets_ms, 2.0).is_none());
    }

    #[test]
    fn test_od5_single_late_hit() {
        let window = HitWindow::new(5.0, Mods::NONE);
        assert_eq!(window.window_50_ms, 149.5);

        let record = correlate(&[press(1010.0)], &[Target::circle(1000.0)], &window);
        assert_eq!(record.offsets_ms, vec![10.0]);

        let summary = summarize(&record.offsets_ms, 2.0).unwrap();
        assert_eq!(summary.mean_offset_ms, 10.0);
        assert_eq!(summary.stdev_offset_ms, 0.0);
        assert_eq!(summary.tendency, Tendency::Late);
    }

    #[test]
    fn test_od8_double_time_out_of_window() {
        let window = HitWindow::new(8.0, Mods::from(Mod::DoubleTime));
        assert!((window.window_50_ms - 79.67).abs() < 0.01);

        let record = correlate(&[press(2200.0)], &[Target::circle(2000.0)], &window);
        assert_eq!(record.matched_count, 0);
    }

    #[test]
    fn test_one_press_two_targets() {
        let window = HitWindow::new(5.0, Mods::NONE);
        let targets = [Target::circle(1000.0), Target::circle(1020.0)];
        let record = correlate(&[press(1010.0)], &targets, &window);
        assert_eq!(record.matched_count, 1);
        assert_eq!(record.offsets_ms, vec![10.0]);
        assert_eq!(record.misses.behind_cursor, 1);
    }

    #[test]
    fn test_spread_offsets_summary() {
        let summary = summarize(&[-5.0, -3.0, 0.0, 2.0, 6.0], 2.0).unwrap();
        assert_eq!(summary.mean_offset_ms, 0.0);
        assert!((summary.stdev_offset_ms - (74.0f64 / 4.0).sqrt()).abs() < 1e-12);
        assert!((summary.unstable_rate - summary.stdev_offset_ms * 10.0).abs() < 1e-12);
        assert_eq!(summary.tendency, Tendency::OnTime);
    }
}

/// Decoder output flowing into correlation
mod pipeline_tests {
    use super::*;

    #[test]
    fn test_decoded_stream_correlates() {
        // Prologue frames, then presses at 1003, 1497 and 2020 (raw time)
        let frames = vec![
            ReplayFrame::new(0, 0),
            ReplayFrame::new(-1, 0),
            ReplayFrame::new(1003, 5),
            ReplayFrame::new(16, 5),
            ReplayFrame::new(16, 0),
            ReplayFrame::new(462, 10),
            ReplayFrame::new(16, 0),
            ReplayFrame::new(507, 5),
        ];
        let events = decode_frames(&frames, -8, TriggerPolicy::Edge);
        let times: Vec<f64> = events.iter().map(|e| e.timestamp_ms).collect();
        assert_eq!(times, vec![995.0, 1489.0, 2012.0]);

        let targets = [
            Target::circle(1000.0),
            Target::slider(1500.0),
            Target::spinner(1700.0),
            Target::circle(2000.0),
        ];
        let record = correlate(&events, &targets, &HitWindow::new(6.0, Mods::NONE));
        assert_eq!(record.offsets_ms, vec![-5.0, -11.0, 12.0]);
        assert_eq!(record.skipped_count, 1);

        let summary = summarize(&record.offsets_ms, 2.0).unwrap();
        assert!((summary.mean_offset_ms - (-4.0 / 3.0)).abs() < 1e-9);
        assert_eq!(summary.tendency, Tendency::OnTime);
    }

    #[test]
    fn test_level_and_edge_agree_on_clean_taps() {
        let frames = vec![
            ReplayFrame::new(990, 1),
            ReplayFrame::new(8, 1),
            ReplayFrame::new(8, 0),
            ReplayFrame::new(490, 2),
            ReplayFrame::new(8, 0),
        ];
        let targets = [Target::circle(1000.0), Target::circle(1500.0)];
        let window = HitWindow::new(5.0, Mods::NONE);

        let edge = correlate(&decode_frames(&frames, 0, TriggerPolicy::Edge), &targets, &window);
        let level = correlate(&decode_frames(&frames, 0, TriggerPolicy::Level), &targets, &window);
        assert_eq!(edge.offsets_ms, vec![-10.0, -4.0]);
        // Level triggering picks the held frame closest to the target
        assert_eq!(level.offsets_ms, vec![-2.0, -4.0]);
    }
}

/// Config and documents from disk
mod file_tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_config_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hitoffset.toml");
        fs::write(
            &path,
            "calibration_offset_ms = 0\ntendency_threshold_ms = 1.5\ntrigger_policy = \"edge\"\n",
        )
        .unwrap();

        let config = AnalysisConfig::load(&path).unwrap();
        assert_eq!(config.calibration_offset_ms, 0);
        assert_eq!(config.tendency_threshold_ms, 1.5);
        assert_eq!(config.default_difficulty, Some(5.0));
    }

    #[test]
    fn test_config_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AnalysisConfig::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_analyze_documents_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let replay_path = dir.path().join("session_01.json");
        let chart_path = dir.path().join("chart.json");
        fs::write(
            &replay_path,
            r#"{"mods": "HD", "frames": [
                {"time_delta": -1, "keys": 0},
                {"time_delta": 1002, "keys": 5},
                {"time_delta": 16, "keys": 0}
            ]}"#,
        )
        .unwrap();
        fs::write(
            &chart_path,
            r#"{"name": "Test Map [Hard]", "difficulty": 7.0,
                "targets": [{"time_ms": 1000.0, "kind": "circle"}]}"#,
        )
        .unwrap();

        let replay = ReplayDocument::load(&replay_path).unwrap();
        let chart = ChartDocument::load(&chart_path).unwrap();
        let analyzer = Analyzer::new(AnalysisConfig {
            calibration_offset_ms: 0,
            ..Default::default()
        });
        let report = analyzer.analyze(&replay, &chart).unwrap();

        assert_eq!(report.replay_name, "session_01");
        assert_eq!(report.chart_name.as_deref(), Some("Test Map [Hard]"));
        assert_eq!(report.difficulty, 7.0);
        assert_eq!(report.record.offsets_ms, vec![2.0]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["tendency"], "OnTime");
        assert_eq!(json["mods"], 8);
    }

    #[test]
    fn test_unsorted_chart_rejected() {
        let replay = ReplayDocument::default();
        let chart = ChartDocument {
            name: None,
            difficulty: Some(5.0),
            targets: vec![Target::circle(10.0), Target::circle(5.0)],
        };
        let result = Analyzer::default().analyze(&replay, &chart);
        assert!(matches!(result, Err(Error::UnsortedTargets { index: 1 })));
    }
}
