use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rs_scaled_fft::fixed::magnitude::magnitudes;
use rs_scaled_fft::{ScaledFft, TwiddleTable};

fn bench_real_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("real_transform");

    for &n in &[128usize, 256, 1024] {
        let mut storage = vec![0; TwiddleTable::required_len(n)];
        let table = TwiddleTable::new(&mut storage, n).unwrap();
        let fft = ScaledFft::new(&table, n).unwrap();

        let input: Vec<i32> = (0..n).map(|i| ((i * 7919) % 257) as i32 - 128).collect();
        let mut re = vec![0; n];
        let mut im = vec![0; n];
        let mut mags = vec![0u32; n];

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                re.copy_from_slice(&input);
                im.fill(0);
                fft.process_real(black_box(&mut re), black_box(&mut im)).unwrap();
                magnitudes(&re, &im, &mut mags).unwrap();
                black_box(&mags);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_real_transform);
criterion_main!(benches);
