//! Integration tests for extension dispatch through `ingest`

use asm_listing_drop::{ingest, AssembleError, Download, IngestError, SelectedFile};

fn fixed_listing(source: &str) -> Result<String, AssembleError> {
    match source {
        "MOV A,B" => Ok("0x01 0x02".to_string()),
        other => Err(AssembleError::Failed(format!("unknown source: {}", other))),
    }
}

#[test]
fn test_program_asm_scenario() {
    let file = SelectedFile::new("program.asm", "MOV A,B");

    let outcome = ingest(&file, &fixed_listing).expect("program.asm should assemble");

    assert_eq!(outcome.source.as_deref(), Some("MOV A,B"));
    assert_eq!(outcome.listing.as_deref(), Some("0x01 0x02"));
    assert_eq!(
        outcome.download,
        Some(Download {
            file_name: "program.lst".to_string(),
            content: "0x01 0x02".to_string(),
        })
    );
}

#[test]
fn test_output_lst_scenario() {
    let file = SelectedFile::new("output.lst", "0xFF");

    let outcome = ingest(&file, &fixed_listing).unwrap();

    assert_eq!(outcome.source, None, "source region must not change");
    assert_eq!(outcome.listing.as_deref(), Some("0xFF"));
    assert_eq!(outcome.download, None, "listings are never downloaded");
}

#[test]
fn test_notes_txt_scenario() {
    let file = SelectedFile::new("notes.txt", "MOV A,B");

    let outcome = ingest(&file, &fixed_listing).unwrap();

    assert!(outcome.is_empty(), "unrecognized files change nothing");
}

#[test]
fn test_extension_case_is_ignored() {
    for name in ["PROGRAM.ASM", "program.Asm", "program.aSM"] {
        let outcome = ingest(&SelectedFile::new(name, "MOV A,B"), &fixed_listing).unwrap();
        let download = outcome.download.expect("asm files are downloaded");
        assert!(
            download.file_name.ends_with(".lst"),
            "{} should save as .lst, got {}",
            name,
            download.file_name
        );
        assert_eq!(download.file_name.len(), name.len());
    }

    let outcome = ingest(&SelectedFile::new("OUTPUT.LST", "0xFF"), &fixed_listing).unwrap();
    assert_eq!(outcome.listing.as_deref(), Some("0xFF"));
}

#[test]
fn test_empty_source_is_still_assembled() {
    let echo = |source: &str| -> Result<String, AssembleError> { Ok(format!("[{}]", source)) };

    let outcome = ingest(&SelectedFile::new("empty.asm", ""), &echo).unwrap();

    assert_eq!(outcome.source.as_deref(), Some(""));
    assert_eq!(outcome.listing.as_deref(), Some("[]"));
    assert_eq!(outcome.download.unwrap().content, "[]");
}

#[test]
fn test_assembler_failure_is_reported() {
    let file = SelectedFile::new("broken.asm", "JMP nowhere");

    let err = ingest(&file, &fixed_listing).unwrap_err();

    assert_eq!(err.file_name(), "broken.asm");
    assert!(matches!(
        err,
        IngestError::Assemble {
            source: AssembleError::Failed(_),
            ..
        }
    ));
}
