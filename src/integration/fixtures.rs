//! Test fixtures for integration tests
//!
//! Catalogs shaped like the ones the scrapers hand over.

use crate::model::{ContentEntry, StreamRecord};

/// Test catalog information
#[derive(Debug, Clone)]
pub struct TestCatalog {
    pub name: &'static str,
    pub description: &'static str,
    pub entries: Vec<ContentEntry>,
    /// Per-entry files expected, relative to the output root.
    pub expected_files: Vec<&'static str>,
    /// Records expected in the combined playlist.
    pub expected_records: usize,
}

impl TestCatalog {
    /// Series and programs routed into two directories
    pub fn broadcaster() -> Self {
        Self {
            name: "broadcaster",
            description: "Series and programs with entry logos",
            entries: vec![
                ContentEntry::new("Kuruluş Osman", "dizi")
                    .with_logo("https://img.example/osman.jpg")
                    .with_episode(StreamRecord::new("1. Bölüm", "https://vms.example/1.m3u8"))
                    .with_episode(StreamRecord::new("2. Bölüm", "https://vms.example/2.m3u8")),
                ContentEntry::new("Müge Anlı", "program")
                    .with_logo("https://img.example/muge.jpg")
                    .with_episode(StreamRecord::new("Son Bölüm", "https://vms.example/m.m3u8")),
                ContentEntry::new("Yeni Dizi", "dizi"),
            ],
            expected_files: vec!["diziler/kurulus-osman.m3u", "programlar/muge-anli.m3u"],
            expected_records: 3,
        }
    }

    /// Aggregator entries, some episodes without a resolved stream
    pub fn aggregator() -> Self {
        Self {
            name: "aggregator",
            description: "Series with partially resolved episodes",
            entries: vec![
                ContentEntry::new("Gönül Dağı", "dizi")
                    .with_logo("https://img.example/gd.jpg")
                    .with_episode(StreamRecord::new("Bölüm 1", "https://cdn.example/gd1.m3u8"))
                    .with_episode(StreamRecord::new("Bölüm 2", ""))
                    .with_episode(StreamRecord::new("Bölüm 3", "https://cdn.example/gd3.m3u8")),
                ContentEntry::new("Sen \"Anlat\" Karadeniz", "dizi").with_episode(
                    StreamRecord::new("Final", "https://cdn.example/sak.m3u8")
                        .with_logo("https://img.example/final.jpg"),
                ),
            ],
            expected_files: vec!["diziler/gonul-dagi.m3u", "diziler/sen-anlat-karadeniz.m3u"],
            expected_records: 3,
        }
    }

    /// Match highlights grouped by league and season
    pub fn highlights() -> Self {
        Self {
            name: "highlights",
            description: "Highlights with tvg-id and per-record thumbnails",
            entries: vec![
                ContentEntry::new("Süper Lig 2024/2025", "mac").with_episode(
                    StreamRecord::new("Ev 2-1 Dep", "https://video.example/a.mp4")
                        .with_tvg_id("3746-1")
                        .with_logo("https://img.example/a.jpg"),
                ),
                ContentEntry::new("Trendyol 1. Lig 2024/2025", "mac").with_episode(
                    StreamRecord::new("X 0-0 Y", "https://video.example/b.mp4")
                        .with_tvg_id("3759-1"),
                ),
            ],
            expected_files: vec![
                "mac/super-lig-2024-2025.m3u",
                "mac/trendyol-1-lig-2024-2025.m3u",
            ],
            expected_records: 2,
        }
    }

    /// Nothing playable at all
    pub fn unresolved() -> Self {
        Self {
            name: "unresolved",
            description: "Entries whose streams all failed to resolve",
            entries: vec![
                ContentEntry::new("A", "dizi").with_episode(StreamRecord::new("Ep1", "")),
                ContentEntry::new("B", "program"),
            ],
            expected_files: vec![],
            expected_records: 0,
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::broadcaster(), Self::aggregator(), Self::highlights()]
    }
}
