use moi_core::{resolve_moi_paths, MoiParser, PathError, MIN_MOI_LEN};
use tempfile::TempDir;
use tokio::fs;

/// Build a complete, valid MOI buffer: version "V6", recorded
/// 2009-07-17 14:18, 1440 ms of 16:9 PAL video.
fn valid_moi_data() -> Vec<u8> {
    let mut data = vec![0u8; MIN_MOI_LEN];
    data[0x00..0x02].copy_from_slice(b"V6");
    data[0x02..0x06].copy_from_slice(&278u32.to_be_bytes());
    data[0x06..0x08].copy_from_slice(&2009u16.to_be_bytes());
    data[0x08] = 7;
    data[0x09] = 17;
    data[0x0A] = 14;
    data[0x0B] = 18;
    data[0x0E..0x12].copy_from_slice(&1440u32.to_be_bytes());
    data[0x80] = 0x55;
    data
}

#[tokio::test]
async fn resolves_a_single_moi_file() {
    let temp_dir = TempDir::new().unwrap();
    let moi_path = temp_dir.path().join("MOV045.MOI");
    fs::write(&moi_path, valid_moi_data()).await.unwrap();

    let paths = resolve_moi_paths(&moi_path).await.unwrap();
    assert_eq!(paths, vec![moi_path]);
}

#[tokio::test]
async fn resolves_directory_entries_sorted() {
    let temp_dir = TempDir::new().unwrap();

    // Written out of order; lowercase extensions still count.
    for name in ["MOV030.MOI", "MOV010.MOI", "mov020.moi"] {
        fs::write(temp_dir.path().join(name), valid_moi_data())
            .await
            .unwrap();
    }
    // Non-MOI neighbours are ignored.
    fs::write(temp_dir.path().join("MOV010.MOD"), b"video data")
        .await
        .unwrap();
    fs::write(temp_dir.path().join("notes.txt"), b"notes")
        .await
        .unwrap();

    let paths = resolve_moi_paths(temp_dir.path()).await.unwrap();
    let names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(names, vec!["MOV010.MOI", "MOV030.MOI", "mov020.moi"]);
}

#[tokio::test]
async fn subdirectories_are_not_entered() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).await.unwrap();
    fs::write(nested.join("MOV001.MOI"), valid_moi_data())
        .await
        .unwrap();

    let paths = resolve_moi_paths(temp_dir.path()).await.unwrap();
    assert!(paths.is_empty());
}

#[tokio::test]
async fn empty_directory_resolves_to_no_paths() {
    let temp_dir = TempDir::new().unwrap();
    let paths = resolve_moi_paths(temp_dir.path()).await.unwrap();
    assert!(paths.is_empty());
}

#[tokio::test]
async fn wrong_extension_is_rejected_before_reading() {
    let temp_dir = TempDir::new().unwrap();
    let mod_path = temp_dir.path().join("MOV045.MOD");
    fs::write(&mod_path, b"not an moi file").await.unwrap();

    let err = resolve_moi_paths(&mod_path).await.unwrap_err();
    assert!(matches!(err, PathError::InvalidExtension(p) if p == mod_path));
}

#[tokio::test]
async fn missing_path_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("NOTHERE.MOI");

    let err = resolve_moi_paths(&missing).await.unwrap_err();
    assert!(matches!(err, PathError::NotFound(p) if p == missing));
}

#[tokio::test]
async fn parsed_records_round_trip_through_json() {
    let temp_dir = TempDir::new().unwrap();
    let moi_path = temp_dir.path().join("MOV045.MOI");
    fs::write(&moi_path, valid_moi_data()).await.unwrap();

    let data = fs::read(&moi_path).await.unwrap();
    let moi_file = MoiParser::new(&data).parse().unwrap();

    let json = serde_json::to_string(&moi_file).unwrap();
    let restored: moi_core::MoiFile = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, moi_file);
}

#[tokio::test]
async fn resolved_file_parses_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let moi_path = temp_dir.path().join("MOV045.MOI");
    fs::write(&moi_path, valid_moi_data()).await.unwrap();

    let paths = resolve_moi_paths(&moi_path).await.unwrap();
    let data = fs::read(&paths[0]).await.unwrap();
    let moi_file = MoiParser::new(&data).parse().unwrap();

    assert_eq!(moi_file.version, "V6");
    assert_eq!(moi_file.file_size, 278);
    assert_eq!(moi_file.video_length_formatted(), "00:01");
}
