pub mod tests_records;
pub mod tests_utils;

use coachdesk::{Error as StoreError, prelude::*};
use std::{error::Error, fs};
use tests_records::*;
use tests_utils::*;

#[test]
fn refresh_replaces_rows_with_external_file_contents() -> Result<(), Box<dyn Error>> {
    init_tracing_for_tests();

    let (working_dir, _temp_dir_drop_guard) = create_temp_working_dir("external", JsonDB::NAME);
    let store = RecordStore::<JsonDB>::open(StoreConfig::new(&working_dir));
    let (_form, mut listing) = form_and_listing();

    {
        span_and_info!("Initial");

        store.save_students(&students(3))?;
        store.save_courses(&courses(3))?;
        listing.refresh(&store)?;
        assert_eq!(listing.students().len(), 3);
        assert_eq!(listing.state(), ViewState::Loaded);
    }

    {
        span_and_info!("External rewrite", "Another writer replaces both files");

        fs::write(
            store.student_path(),
            r#"[{ "id": 40, "name": "Zoe" }, { "id": 40, "name": "Zed" }]"#,
        )?;
        fs::write(
            store.course_path(),
            r#"[{ "id": 1, "name": "Chess", "course_type": "NON_MAJOR" }]"#,
        )?;

        // Nothing watches the files.
        assert_eq!(listing.students().len(), 3);
        assert!(!listing.sync(&store)?);

        listing.refresh(&store)?;
        assert_eq!(
            listing.student_rows(),
            vec![
                ["40".to_string(), "Zoe".to_string()],
                ["40".to_string(), "Zed".to_string()],
            ]
        );
        assert_eq!(
            listing.courses(),
            &[Course::new(1, "Chess", CourseType::NonMajor)]
        );
    }

    {
        span_and_info!("Files removed");

        fs::remove_file(store.student_path())?;
        fs::remove_file(store.course_path())?;
        listing.refresh(&store)?;
        assert!(listing.students().is_empty());
        assert!(listing.courses().is_empty());
    }

    Ok(())
}

#[test]
fn failed_refresh_keeps_rows_and_goes_stale() -> Result<(), Box<dyn Error>> {
    init_tracing_for_tests();

    let (working_dir, _temp_dir_drop_guard) = create_temp_working_dir("failed", JsonDB::NAME);
    let store = RecordStore::<JsonDB>::open(StoreConfig::new(&working_dir));
    let (_form, mut listing) = form_and_listing();

    store.save_students(&[ann()])?;
    store.save_courses(&[algebra()])?;
    listing.refresh(&store)?;

    fs::write(store.course_path(), r#"{ "not": "a list" }"#)?;

    assert!(matches!(
        listing.refresh(&store),
        Err(StoreError::StorageCorrupt { .. })
    ));
    assert_eq!(listing.state(), ViewState::Stale);
    assert_eq!(listing.students(), &[ann()]);
    assert_eq!(listing.courses(), &[algebra()]);

    store.save_courses(&courses(1))?;
    listing.refresh(&store)?;
    assert_eq!(listing.state(), ViewState::Loaded);
    assert_eq!(listing.courses(), courses(1).as_slice());

    Ok(())
}

#[test]
fn form_may_be_built_before_listing() -> Result<(), Box<dyn Error>> {
    init_tracing_for_tests();

    let (working_dir, _temp_dir_drop_guard) = create_temp_working_dir("order", JsonDB::NAME);
    let store = RecordStore::<JsonDB>::open(StoreConfig::new(&working_dir));

    let (tx, rx) = store_events();
    let mut form = EntryForm::new(tx);

    fill(&mut form, "7", "Ann", "3", "Algebra", CourseType::Major);
    form.submit(&store)?;

    // Built after the submit; the queued event still reaches it.
    let mut listing = ListingView::new(rx);
    assert!(listing.sync(&store)?);
    assert_eq!(listing.students(), &[ann()]);

    Ok(())
}

#[test]
fn custom_file_names_are_honoured() -> Result<(), Box<dyn Error>> {
    init_tracing_for_tests();

    let (working_dir, _temp_dir_drop_guard) = create_temp_working_dir("names", JsonDB::NAME);
    let config = StoreConfig {
        student_file: "pupils".into(),
        course_file: "classes".into(),
        ..StoreConfig::new(&working_dir)
    };
    let store = RecordStore::<JsonDB>::open(config);
    let (mut form, mut listing) = form_and_listing();

    fill(&mut form, "7", "Ann", "3", "Algebra", CourseType::Major);
    form.submit(&store)?;
    listing.sync(&store)?;

    assert!(working_dir.join("pupils.json").is_file());
    assert!(working_dir.join("classes.json").is_file());
    assert!(!working_dir.join("studentData.json").exists());
    assert_eq!(listing.courses(), &[algebra()]);

    Ok(())
}
