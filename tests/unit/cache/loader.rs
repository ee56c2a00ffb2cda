use std::io::Cursor;

use super::*;

fn encode_png(pixels: &[u8], w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(w, h, pixels.to_vec()).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_premultiplies_alpha() {
    let bytes = encode_png(&[10, 20, 30, 128], 1, 1);
    let tex = decode_texture(&bytes).unwrap();
    assert_eq!((tex.width, tex.height), (1, 1));
    assert_eq!(tex.rgba8_premul.as_slice(), &[5, 10, 15, 128]);
}

#[test]
fn decode_zero_alpha_pixels_go_black() {
    let bytes = encode_png(&[200, 200, 200, 0], 1, 1);
    let tex = decode_texture(&bytes).unwrap();
    assert_eq!(tex.rgba8_premul.as_slice(), &[0, 0, 0, 0]);
}

#[test]
fn decode_rejects_garbage_bytes() {
    assert!(decode_texture(b"definitely not an image").is_err());
}

#[test]
fn fs_source_reads_relative_to_root() {
    let tmp = std::env::temp_dir().join(format!(
        "smudge_loader_test_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(tmp.join("art.png"), encode_png(&[1, 2, 3, 255], 1, 1)).unwrap();

    let source = FsSource::new(&tmp);
    let bytes = source.fetch("art.png").unwrap();
    assert!(decode_texture(&bytes).is_ok());

    assert!(source.fetch("missing.png").is_err());

    std::fs::remove_dir_all(&tmp).ok();
}
