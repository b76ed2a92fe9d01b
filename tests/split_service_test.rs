//! End-to-end tests for SplitService: in-memory seams and real monolith files.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use rstax::application::SplitService;
use rstax::domain::{CladeId, Record, Taxonomy};
use rstax::infrastructure::{MonolithFile, MonolithWriter, RecordSource, VecSink, VecSource};
use rstax::util::testing;

fn sample_records() -> Vec<Record> {
    vec![
        Record::new("000000", None, "Life"),
        Record::new("A", Some("000000".into()), "Animals"),
        Record::new("B", Some("000000".into()), "Fungi"),
        Record::new("C", Some("A".into()), "Primates"),
        Record::new("D", Some("C".into()), "Human"),
        Record::new("E", Some("B".into()), "Other"),
    ]
}

#[test]
fn given_in_memory_source_when_splitting_then_report_counts_match_sinks() {
    testing::init_test_setup();
    let mut source = VecSource::new(sample_records());
    let mut core = VecSink::default();
    let mut remainder = VecSink::default();

    let service = SplitService::new(CladeId::from("C"), 1);
    let report = service.split(&mut source, &mut core, &mut remainder).unwrap();

    assert_eq!(report.total, 6);
    assert_eq!(report.core, 5);
    assert_eq!(report.remainder, 1);
    assert_eq!(report.root.as_str(), "000000");
    assert_eq!(core.records.len(), report.core);
    assert_eq!(remainder.records.len(), report.remainder);

    // core is emitted in pre-order
    let order: Vec<&str> = core.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(order, vec!["000000", "A", "C", "D", "B"]);
    assert_eq!(remainder.records[0].id.as_str(), "E");
}

#[test]
fn given_two_root_records_when_splitting_then_fails_and_sinks_stay_empty() {
    testing::init_test_setup();
    let mut records = sample_records();
    records.push(Record::new("ZZ", None, "Second root"));
    let mut source = VecSource::new(records);
    let mut core = VecSink::default();
    let mut remainder = VecSink::default();

    let service = SplitService::new(CladeId::from("C"), 1);
    let result = service.split(&mut source, &mut core, &mut remainder);

    assert!(result.is_err());
    assert!(core.records.is_empty());
    assert!(remainder.records.is_empty());
}

fn write_monolith(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, lines.join("\n")).expect("write monolith");
    path
}

#[test]
fn given_monolith_file_when_splitting_then_partitions_land_on_disk() {
    testing::init_test_setup();
    let temp = TempDir::new().unwrap();
    let monolith = write_monolith(
        &temp,
        "monolith.txt",
        &[
            "000000 - Life",
            "A 000000 Animals",
            "B 000000 Fungi",
            "C A Primates",
            "D C Human",
            "E B Other",
        ],
    );
    let core_path = temp.path().join("monolith.a.txt");
    let remainder_path = temp.path().join("monolith.b.txt");

    let mut source = MonolithFile::new(&monolith, "-");
    let mut core_sink = MonolithWriter::create(&core_path, "-").unwrap();
    let mut remainder_sink = MonolithWriter::create(&remainder_path, "-").unwrap();

    let service = SplitService::new(CladeId::from("C"), 1);
    let report = service
        .split(&mut source, &mut core_sink, &mut remainder_sink)
        .unwrap();

    assert_eq!(report.core, 5);
    assert_eq!(report.remainder, 1);

    let core_content = fs::read_to_string(&core_path).unwrap();
    assert_eq!(
        core_content,
        "000000 - Life\nA 000000 Animals\nC A Primates\nD C Human\nB 000000 Fungi\n"
    );
    let remainder_content = fs::read_to_string(&remainder_path).unwrap();
    assert_eq!(remainder_content, "E B Other\n");
}

#[test]
fn given_split_partitions_when_read_back_then_tree_round_trips() {
    testing::init_test_setup();
    let temp = TempDir::new().unwrap();
    let monolith = write_monolith(
        &temp,
        "monolith.txt",
        &[
            "000000 - Life",
            "A 000000 Animals",
            "B 000000 Fungi",
            "C A Primates",
            "D C Human",
            "E B Other",
        ],
    );
    let core_path = temp.path().join("core.txt");
    let remainder_path = temp.path().join("remainder.txt");

    let mut source = MonolithFile::new(&monolith, "-");
    let mut core_sink = MonolithWriter::create(&core_path, "-").unwrap();
    let mut remainder_sink = MonolithWriter::create(&remainder_path, "-").unwrap();
    SplitService::new(CladeId::from("C"), 1)
        .split(&mut source, &mut core_sink, &mut remainder_sink)
        .unwrap();

    // Reading both partitions back reconstructs the original node set with
    // unchanged parent and name attributes per node.
    let mut reread = MonolithFile::new(&core_path, "-").scan().unwrap();
    reread.extend(MonolithFile::new(&remainder_path, "-").scan().unwrap());
    let rebuilt = Taxonomy::build(reread).unwrap();
    let original = Taxonomy::build(sample_records()).unwrap();

    let rebuilt_ids: HashSet<&CladeId> = rebuilt.ids().collect();
    let original_ids: HashSet<&CladeId> = original.ids().collect();
    assert_eq!(rebuilt_ids, original_ids);
    for id in original.ids() {
        let orig = original.node(id).unwrap();
        let back = rebuilt.node(id).unwrap();
        assert_eq!(orig.parent, back.parent, "parent changed for {id}");
        assert_eq!(orig.name, back.name, "name changed for {id}");
    }
}

#[test]
fn given_malformed_monolith_when_scanning_then_errors_with_line_number() {
    testing::init_test_setup();
    let temp = TempDir::new().unwrap();
    let monolith = write_monolith(&temp, "broken.txt", &["000000 - Life", "oops"]);

    let result = MonolithFile::new(&monolith, "-").scan();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("line 2"), "got: {err}");
}
