use image::ImageEncoder;
use skin_totem::{build_pack, convert_skin, ArmModel, PackConfig, TotemError};
use std::io::{Cursor, Read};

fn skin_png(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x * 3) as u8, (y * 3) as u8, ((x + y) * 2) as u8, 255]);
        }
    }

    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut bytes)
        .write_image(&pixels, width, height, image::ExtendedColorType::Rgba8)
        .unwrap();
    bytes
}

fn read_entry(archive: &[u8], path: &str) -> Vec<u8> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive)).unwrap();
    let mut file = zip.by_name(path).unwrap();
    let mut data = Vec::new();
    file.read_to_end(&mut data).unwrap();
    data
}

#[test]
fn converting_twice_yields_identical_textures() {
    let skin = skin_png(64, 64);
    let config = PackConfig::default();

    let first = build_pack(&skin, &config).unwrap();
    let second = build_pack(&skin, &config).unwrap();

    let first_texture = read_entry(&first.archive, "textures/items/totem.png");
    let second_texture = read_entry(&second.archive, "textures/items/totem.png");
    assert_eq!(first_texture, second_texture);
    assert_eq!(first_texture, first.totem_png);
    assert_eq!(read_entry(&first.archive, "pack_icon.png"), first_texture);

    assert_ne!(first.manifest.header.uuid, second.manifest.header.uuid);
    assert_ne!(first.manifest.modules[0].uuid, second.manifest.modules[0].uuid);
}

#[test]
fn pack_keeps_uploaded_skin() {
    let skin = skin_png(64, 64);
    let pack = build_pack(&skin, &PackConfig::default()).unwrap();
    assert_eq!(read_entry(&pack.archive, "textures/custom_totem/totem.png"), skin);

    let manifest: serde_json::Value =
        serde_json::from_slice(&read_entry(&pack.archive, "manifest.json")).unwrap();
    assert_eq!(manifest["header"]["uuid"], pack.manifest.header.uuid.to_string());
}

#[test]
fn pack_without_uploaded_skin_uses_totem() {
    let skin = skin_png(64, 64);
    let config = PackConfig {
        include_source_skin: false,
        ..PackConfig::default()
    };
    let pack = build_pack(&skin, &config).unwrap();
    assert_eq!(read_entry(&pack.archive, "textures/custom_totem/totem.png"), pack.totem_png);
}

#[test]
fn slim_pack_is_named_accordingly() {
    let skin = skin_png(64, 64);
    let pack = build_pack(&skin, &PackConfig::default().with_slim_arms(true)).unwrap();
    assert_eq!(pack.file_name, "custom_totem_slim.mcpack");
    assert_eq!(pack.manifest.modules[0].description, "Slim totem model resources");
}

#[test]
fn legacy_skin_converts() {
    let totem = convert_skin(&skin_png(64, 32), ArmModel::Classic).unwrap();
    // Head comes from the first 16 rows
    assert_eq!(totem.get_pixel(4, 0)[3], 255);
    // Left arm only exists on 64x64 skins
    assert_eq!(totem.get_pixel(12, 8)[3], 0);
}

#[test]
fn rejects_non_skin_images() {
    let err = convert_skin(&skin_png(32, 32), ArmModel::Classic).unwrap_err();
    assert!(matches!(err, TotemError::UnsupportedSkinSize { .. }));

    let err = build_pack(b"GIF89a", &PackConfig::default()).unwrap_err();
    assert!(matches!(err, TotemError::UnreadableImage(_)));
}

#[test]
fn pack_written_to_disk_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let pack = build_pack(&skin_png(64, 64), &PackConfig::default()).unwrap();

    let path = dir.path().join(pack.file_name);
    std::fs::write(&path, &pack.archive).unwrap();

    let archive = std::fs::read(&path).unwrap();
    let zip = zip::ZipArchive::new(Cursor::new(archive)).unwrap();
    assert_eq!(zip.len(), 4);
}
