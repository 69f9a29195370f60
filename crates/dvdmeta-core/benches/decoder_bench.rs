use std::fmt::Write;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dvdmeta_core::Decoder;

fn sample_report(tracks: usize) -> String {
    let mut xml = String::from("<?xml version=\"1.0\"?>\n<lsdvd>\n<device>./bench</device>\n");
    for ix in 1..=tracks {
        let _ = write!(
            xml,
            "<track><ix>{ix}</ix><length>{}.5</length><format>PAL</format>\
             <df>Pan&Scan&Letterbox</df><width>720</width><height>576</height>\
             <audio><ix>1</ix><language>English</language><frequency>48000</frequency></audio>",
            2000 + ix * 60
        );
        for ch in 1..=8 {
            let _ = write!(
                xml,
                "<chapter><ix>{ch}</ix><length>{}.0</length><startcell>{ch}</startcell></chapter>",
                ch * 330
            );
        }
        xml.push_str("</track>\n");
    }
    let _ = write!(xml, "<longest_track>{tracks}</longest_track>\n</lsdvd>");
    xml
}

fn bench_decode(c: &mut Criterion) {
    let decoder = Decoder::new().unwrap();
    let report = sample_report(30);

    c.bench_function("decode_30_tracks", |b| {
        b.iter(|| decoder.decode(black_box(report.as_bytes())).unwrap());
    });
}

fn bench_match(c: &mut Criterion) {
    let disc = Decoder::new()
        .unwrap()
        .decode(sample_report(30).as_bytes())
        .unwrap();

    c.bench_function("find_forty_minute_content", |b| {
        b.iter(|| black_box(&disc).find_forty_minute_content());
    });
}

criterion_group!(benches, bench_decode, bench_match);
criterion_main!(benches);
