use ndarray::{Array1, Array2};
use netcdf::{create, open, AttributeValue};
use perf_dump_tools::{
    config::{PlotConfig, ProcessConfig},
    dataset::CounterTable,
    errors::{PerfDumpError, Result},
    netcdf_io::{write_counter_dump, PerfDumpFile},
    pipeline::{run_plot, run_process, summarize_file},
    projection::{project, GridShape},
    render::{render_dataset, ColorScale, HeatMap, PanelSize},
};
use std::path::Path;
use tempfile::tempdir;

/// Two counters over 4 ranks and 3 steps; rank r, step s of "PAPI_L1_TCM"
/// holds `10 * (r + 1) + s`, "PAPI_TOT_CYC" holds 1000 everywhere.
fn write_sample_dump(path: &Path) -> Result<()> {
    let misses: Vec<f64> = (0..4)
        .flat_map(|r| (0..3).map(move |s| f64::from(10 * (r + 1) + s)))
        .collect();
    let tables = vec![
        CounterTable::from_row_major("PAPI_L1_TCM", 4, 3, misses)?,
        CounterTable::from_row_major("PAPI_TOT_CYC", 4, 3, vec![1000.0; 12])?,
    ];
    write_counter_dump(path, &tables)
}

#[test]
fn test_dump_round_trip() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("perf-dump.h5");
    write_sample_dump(&file_path)?;

    let file = PerfDumpFile::open(&file_path)?;
    let infos = file.dataset_infos();
    let names: Vec<&str> = infos.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["PAPI_L1_TCM", "PAPI_TOT_CYC"]);
    assert!(infos.iter().all(|i| i.ranks == 4 && i.steps == 3));

    let tables = file.read_all()?;
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].step_values(0)?, vec![10.0, 20.0, 30.0, 40.0]);
    assert_eq!(tables[0].step_values(2)?, vec![12.0, 22.0, 32.0, 42.0]);
    assert_eq!(tables[1].step_values(1)?, vec![1000.0; 4]);

    match file.read_dataset("PAPI_FP_OPS") {
        Err(PerfDumpError::DatasetNotFound { name }) => assert_eq!(name, "PAPI_FP_OPS"),
        _ => panic!("Expected DatasetNotFound error"),
    }

    Ok(())
}

#[test]
fn test_non_table_variables_are_skipped() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("mixed.nc");

    {
        let mut file = create(&file_path)?;
        file.add_dimension("rank", 2)?;
        file.add_dimension("step", 2)?;

        let mut ids = file.add_variable::<i32>("rank_id", &["rank"])?;
        ids.put(Array1::from(vec![0, 1]).view(), ..)?;

        let mut counters = file.add_variable::<i64>("PAPI_TOT_INS", &["rank", "step"])?;
        let data = Array2::from_shape_vec((2, 2), vec![5i64, 6, 7, 8])?;
        counters.put(data.view(), ..)?;
    }

    let file = PerfDumpFile::open(&file_path)?;
    let tables = file.read_all()?;
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].name(), "PAPI_TOT_INS");
    assert_eq!(tables[0].step_values(1)?, vec![6.0, 8.0]);

    assert!(file.read_dataset("rank_id").is_err());

    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let result = PerfDumpFile::open(temp_dir.path().join("does-not-exist.h5"));
    assert!(matches!(result, Err(PerfDumpError::NetCDFError(_))));
}

#[test]
fn test_summarize_file() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("perf-dump.h5");
    write_sample_dump(&file_path)?;

    let summaries = summarize_file(&ProcessConfig::new(&file_path))?;
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].name, "PAPI_L1_TCM");
    assert_eq!(summaries[0].ranks, 4);
    assert_eq!(summaries[0].steps.len(), 3);

    // step 1: 11, 21, 31, 41
    let step1 = &summaries[0].steps[1];
    assert_eq!(step1.step, 1);
    assert_eq!((step1.min, step1.max), (11.0, 41.0));
    assert_eq!(step1.average, 26.0);
    assert!((step1.ratio_max_min - 41.0 / 11.0).abs() < 1e-12);

    let flat = &summaries[1].steps[0];
    assert_eq!((flat.ratio_max_avg, flat.ratio_max_min), (1.0, 1.0));

    let selected = summarize_file(&ProcessConfig::new(&file_path).with_timesteps(vec![2]))?;
    assert_eq!(selected[0].steps.len(), 1);
    assert_eq!(selected[0].steps[0].min, 12.0);

    let out_of_range = summarize_file(&ProcessConfig::new(&file_path).with_timesteps(vec![0, 3]));
    assert!(matches!(
        out_of_range,
        Err(PerfDumpError::InvalidTimestep { requested: 3, steps: 3 })
    ));

    Ok(())
}

#[test]
fn test_process_writes_netcdf_summaries() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("perf-dump.h5");
    let output_path = temp_dir.path().join("summary.nc");
    write_sample_dump(&file_path)?;

    let mut config = ProcessConfig::new(&file_path).with_timesteps(vec![2, 0]);
    config.output_netcdf = Some(output_path.clone());
    run_process(&config)?;

    let output = open(&output_path)?;

    let steps = output
        .variable("PAPI_L1_TCM_step")
        .expect("step variable should exist")
        .get_values::<i64, _>(..)?;
    assert_eq!(steps, vec![2, 0]);

    let mins = output
        .variable("PAPI_L1_TCM_min")
        .expect("min variable should exist")
        .get_values::<f64, _>(..)?;
    assert_eq!(mins, vec![12.0, 10.0]);

    let ratios = output
        .variable("PAPI_TOT_CYC_ratio_max_avg")
        .expect("ratio variable should exist")
        .get_values::<f64, _>(..)?;
    assert_eq!(ratios, vec![1.0, 1.0]);

    let history = output
        .attribute("history")
        .expect("history attribute should exist")
        .value()?;
    match history {
        AttributeValue::Str(text) => assert!(text.starts_with("Created by perf_dump_tools")),
        other => panic!("Expected string history, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_plot_fails_before_drawing_on_shape_mismatch() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("perf-dump.h5");
    let output_dir = temp_dir.path().join("plots");
    write_sample_dump(&file_path)?;

    let mut config = PlotConfig::new(&file_path, GridShape::parse("3x3")?);
    config.output_dir = output_dir.clone();

    assert!(matches!(
        run_plot(&config),
        Err(PerfDumpError::ShapeMismatch { ranks: 4, .. })
    ));
    assert!(!output_dir.exists());

    let mut config = PlotConfig::new(&file_path, GridShape::parse("2x2")?).with_timesteps(vec![5]);
    config.output_dir = output_dir.clone();
    assert!(matches!(
        run_plot(&config),
        Err(PerfDumpError::InvalidTimestep { .. })
    ));
    assert!(!output_dir.exists());

    Ok(())
}

#[test]
fn test_plot_writes_one_image_per_dataset() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("perf-dump.h5");
    let output_dir = temp_dir.path().join("plots");
    write_sample_dump(&file_path)?;

    let mut config = PlotConfig::new(&file_path, GridShape::parse("2x2")?).with_timesteps(vec![0, 1]);
    config.output_dir = output_dir.clone();

    let written = run_plot(&config)?;
    assert_eq!(
        written,
        vec![
            output_dir.join("PAPI_L1_TCM.png"),
            output_dir.join("PAPI_TOT_CYC.png")
        ]
    );

    for path in &written {
        // two 400x400 panels side by side under a 40 pixel title
        let size = image::image_dimensions(path).expect("written file should be a PNG");
        assert_eq!(size, (800, 440));
    }

    Ok(())
}

#[test]
fn test_render_dataset_single_row_panel() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("single.png");

    let grid = project(&[1.0_f64, 5.0, 3.0][..], &GridShape::flat(3))?;
    let panels = vec![HeatMap::from_grid(0, grid)?];
    let size = PanelSize {
        width: 120,
        height: 100,
    };
    render_dataset(&path, "PAPI_FP_OPS", &panels, ColorScale::PerStep, size)?;

    let size = image::image_dimensions(&path).expect("written file should be a PNG");
    assert_eq!(size, (120, 140));

    Ok(())
}
