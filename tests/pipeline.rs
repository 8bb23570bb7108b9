use bayes_roc::config::{OutputMode, RunConfig};
use bayes_roc::datasets::{self, INCOME, MUSHROOM};
use bayes_roc::loader::{load_file, LoadOptions};
use bayes_roc::render::Renderer;
use bayes_roc::{evaluate, BayesError, EvalConfig, FeatureSpec, Schema};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Mushroom lines whose odor and spore colour lean towards the class.
fn write_mushrooms(dir: &Path, count: usize) {
    let mut file = fs::File::create(dir.join("mushroom.data")).unwrap();
    for i in 0..count {
        let edible = i % 2 == 0;
        let (class, odor, spore) = match (edible, i % 5 == 0) {
            (true, false) => ("e", "a", "n"),
            (true, true) => ("e", "n", "k"),
            (false, false) => ("p", "f", "w"),
            (false, true) => ("p", "n", "k"),
        };
        writeln!(
            file,
            "{class},x,s,n,t,{odor},f,c,n,k,e,e,s,s,w,w,p,w,o,p,{spore},s,u"
        )
        .unwrap();
    }
}

#[test]
fn mushroom_run_produces_ascending_curve() {
    let dir = tempfile::tempdir().unwrap();
    write_mushrooms(dir.path(), 90);

    let config = RunConfig {
        data_dir: dir.path().to_path_buf(),
        output_dir: dir.path().join("graphs"),
        seed: Some(11),
        ..Default::default()
    };
    let curve = datasets::run(&MUSHROOM, &config, &mut StdRng::seed_from_u64(11)).unwrap();

    assert_eq!(curve.title, MUSHROOM.title);
    assert!(!curve.points.is_empty());
    for pair in curve.points.windows(2) {
        assert!(pair[0].false_positive_rate < pair[1].false_positive_rate);
    }
    for point in &curve.points {
        assert!((0.0..=1.0).contains(&point.false_positive_rate));
        assert!((0.0..=1.0).contains(&point.true_positive_rate));
    }
    // threshold 0 classifies every row as positive
    let last = curve.points.last().unwrap();
    assert_eq!(last.false_positive_rate, 1.0);
    assert_eq!(last.true_positive_rate, 1.0);
    assert!(curve.auc() > 0.8);

    let mut renderer = Renderer::new(OutputMode::Save, &config.output_dir);
    let saved = renderer.render(&curve).unwrap().unwrap();
    let written = fs::read_to_string(saved).unwrap();
    assert_eq!(written.lines().count(), curve.points.len() + 1);
}

#[test]
fn failing_dataset_does_not_affect_the_next() {
    let dir = tempfile::tempdir().unwrap();
    write_mushrooms(dir.path(), 60);

    let config = RunConfig {
        data_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(3);

    let err = datasets::run(&INCOME, &config, &mut rng).unwrap_err();
    assert!(format!("{err:#}").contains("income.data"));

    assert!(datasets::run(&MUSHROOM, &config, &mut rng).is_ok());
}

#[test]
fn schema_mismatch_names_feature_and_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toy.data");
    fs::write(&path, "x;pos\ny;neg\nx;pos\nq;neg\nx;pos\ny;neg\n").unwrap();

    const TOY: Schema = Schema {
        negative: "neg",
        positive: "pos",
        features: &[FeatureSpec {
            name: "marker",
            categories: &["x", "y"],
        }],
    };
    let options = LoadOptions {
        class_column: 1,
        delimiter: b';',
        missing_marker: None,
    };
    let rows = load_file(&path, &options, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(rows.len(), 6);

    let err = evaluate(&TOY, &rows, &EvalConfig::default()).unwrap_err();
    match err {
        BayesError::UnknownCategory { feature, category } => {
            assert_eq!(feature, "marker");
            assert_eq!(category, "q");
        }
        other => panic!("unexpected error: {other}"),
    }
}
