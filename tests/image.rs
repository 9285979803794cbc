use td4_rs::{ImageWriter, OutputFormat};

fn render(words: &[u8], format: OutputFormat) -> String {
    let mut image = ImageWriter::new(Vec::new(), format).unwrap();
    for &word in words {
        image.push(word).unwrap();
    }
    String::from_utf8(image.finish().unwrap()).unwrap()
}

#[test]
fn header_and_address_prefix_come_first() {
    let out = render(&[0x02], OutputFormat::Hex);
    assert!(out.starts_with("v3.0 hex words addressed\n0: "));
}

#[test]
fn empty_image_is_sixteen_zero_words() {
    assert_eq!(
        render(&[], OutputFormat::Hex),
        format!("v3.0 hex words addressed\n0:{}\n", " 00".repeat(16))
    );
}

#[test]
fn hex_words_render_as_two_lowercase_digits() {
    let out = render(&[0x02, 0x90, 0x0b, 0xff], OutputFormat::Hex);
    assert!(out.contains("0: 02 90 0b ff"));
}

#[test]
fn binary_words_render_as_eight_digits() {
    let out = render(&[0x02, 0x90], OutputFormat::Binary);
    assert!(out.contains("0: 00000010 10010000"));
}

#[test]
fn padding_words_are_hex_even_in_binary_mode() {
    assert_eq!(
        render(&[0xff], OutputFormat::Binary),
        format!("v3.0 hex words addressed\n0: 11111111{}\n", " 00".repeat(15))
    );
}

#[test]
fn fourteen_words_pad_out_to_sixteen() {
    assert_eq!(
        render(&[0x11; 14], OutputFormat::Hex),
        format!("v3.0 hex words addressed\n0:{} 00 00\n", " 11".repeat(14))
    );
}

#[test]
fn fifteen_words_get_no_padding_and_no_final_newline() {
    assert_eq!(
        render(&[0x11; 15], OutputFormat::Hex),
        format!("v3.0 hex words addressed\n0:{}", " 11".repeat(15))
    );
}

#[test]
fn sixteen_words_fill_the_rom_exactly() {
    assert_eq!(
        render(&[0x11; 16], OutputFormat::Hex),
        format!("v3.0 hex words addressed\n0:{}", " 11".repeat(16))
    );
}

#[test]
fn images_longer_than_the_rom_are_written_in_full() {
    assert_eq!(
        render(&[0x11; 20], OutputFormat::Hex),
        format!("v3.0 hex words addressed\n0:{}", " 11".repeat(20))
    );
}

#[test]
fn count_tracks_pushed_words_only() {
    let mut image = ImageWriter::new(Vec::new(), OutputFormat::Hex).unwrap();
    assert_eq!(image.count(), 0);
    image.push(0x02).unwrap();
    image.push(0x90).unwrap();
    assert_eq!(image.count(), 2);
}
