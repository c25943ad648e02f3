use std::collections::HashMap;
use std::path::{Path, PathBuf};

use relprep::config::{PathConfig, VocabOptions, MERGE_OUT_NAME};
use relprep::io::{read_json, WriteMode};
use relprep::pipelines::{Pipeline, Prepare, Stage};
use relprep::processing::{merge, normalize, CharCounts};
use relprep::record::Record;

fn english_lines(nb: usize) -> String {
    (0..nb)
        .map(|x| {
            format!(
                r#"{{"text":"english sentence number {}","spo_list":[{{"subject":"sentence","predicate":"number","object":"{}"}}]}}"#,
                x + 1,
                x + 1
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn chinese_lines(nb: usize) -> String {
    (0..nb)
        .map(|x| {
            format!(
                r#"{{"text":"第{}句中文","spo_list":[{{"subject":"第{}句","predicate":"语言","object":"中文"}},{{"subject":"句","predicate":"编号","object":"{}"}}]}}"#,
                x + 1,
                x + 1,
                x + 1
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_datasets(dir: &Path, nb_train: usize, nb_dev: usize) -> PathConfig {
    let paths = PathConfig::from_dir(dir);
    std::fs::write(
        &paths.schema_in_path,
        r#"{"object_type":"数字","predicate":"number","subject":"sentence"}
{"object_type":"语言","predicate":"语言","subject_type":"句"}
{"object_type":"数字","predicate":"编号","subject_type":"句"}
{"object_type":"数字","predicate":"number","subject":"sentence"}
"#,
    )
    .unwrap();
    std::fs::write(&paths.train_in_path, english_lines(nb_train)).unwrap();
    std::fs::write(&paths.dev_in_path, chinese_lines(nb_dev)).unwrap();
    paths
}

#[test]
fn accumulation_over_splits() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_datasets(dir.path(), 3, 5);

    let mut chars = CharCounts::default();
    let train = normalize(&paths.train_in_path, &paths.train_out_path, &mut chars).unwrap();
    let dev = normalize(&paths.dev_in_path, &paths.dev_out_path, &mut chars).unwrap();

    let mut expected: HashMap<char, u64> = HashMap::new();
    for record in train.iter().chain(dev.iter()) {
        for c in record.text().chars() {
            *expected.entry(c).or_insert(0) += 1;
        }
    }

    assert_eq!(chars.len(), expected.len());
    for (c, n) in chars.iter() {
        assert_eq!(expected[&c], n);
    }
}

#[test]
fn normalized_files_match_sources() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_datasets(dir.path(), 4, 2);
    Prepare::new(paths.clone(), VocabOptions::default())
        .run()
        .unwrap();

    let dev: Vec<Record> = read_json(&paths.dev_out_path).unwrap();
    assert_eq!(dev.len(), 2);
    for (idx, record) in dev.iter().enumerate() {
        assert_eq!(record.text(), format!("第{}句中文", idx + 1));
        assert_eq!(record.spo_list().len(), 2);
        assert_eq!(record.spo_list()[0].predicate(), "语言");
        assert_eq!(record.spo_list()[1].object(), (idx + 1).to_string());
    }
}

#[test]
fn vocabularies() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_datasets(dir.path(), 2, 2);
    let report = Prepare::new(paths.clone(), VocabOptions::default())
        .run()
        .unwrap();

    let schema = report.schema().unwrap();
    let predicates: Vec<&str> = schema.iter().map(|(_, p)| p.as_str()).collect();
    assert_eq!(predicates, vec!["number", "语言", "编号"]);

    let (id2p, p2id): (HashMap<String, String>, HashMap<String, usize>) =
        read_json(&paths.schema_out_path).unwrap();
    assert_eq!(id2p["0"], "number");
    assert_eq!(p2id["编号"], 2);

    let (id2char, char2id): (HashMap<String, String>, HashMap<String, usize>) =
        read_json(&paths.chars_out_path).unwrap();
    assert_eq!(id2char.len(), char2id.len());
    assert!(!id2char.contains_key("0"));
    assert!(!id2char.contains_key("1"));
    for (c, id) in &char2id {
        assert!(*id >= 2);
        assert_eq!(&id2char[&id.to_string()], c);
    }
}

#[test]
fn merge_three_and_five() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_datasets(dir.path(), 3, 5);
    Prepare::new(paths.clone(), VocabOptions::default())
        .run()
        .unwrap();

    let srcs: Vec<PathBuf> = vec![paths.train_out_path.clone(), paths.dev_out_path.clone()];
    let dst = dir.path().join(MERGE_OUT_NAME);

    let report = merge(&dst, &srcs, 8, WriteMode::Truncate).unwrap();
    assert!(report.is_match());
    let merged: Vec<Record> = read_json(&dst).unwrap();
    assert_eq!(merged.len(), 8);
    assert_eq!(merged[0].text(), "english sentence number 1");
    assert_eq!(merged[3].text(), "第1句中文");

    let report = merge(&dst, &srcs, 7, WriteMode::Truncate).unwrap();
    assert!(!report.is_match());
    let merged: Vec<Record> = read_json(&dst).unwrap();
    assert_eq!(merged.len(), 8);
}

#[test]
fn prepare_no_folders() {
    let paths = PathConfig::from_dir(Path::new("svdkjljlkmjlmdsfljkf"));
    let report = Prepare::new(paths, VocabOptions::default()).report();

    // vocabulary writing fails too: the destination folder does not exist
    for stage in [Stage::Schema, Stage::Train, Stage::Dev, Stage::Chars] {
        assert!(report.failed(stage));
    }
    assert!(report.into_result().is_err());
}
