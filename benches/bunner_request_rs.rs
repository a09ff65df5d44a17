use bunner_request_rs::{AcceptList, RequestContext, RequestSnapshot, TrustNone, TrustedHosts};
use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use once_cell::sync::Lazy;
use pprof::criterion::{Output, PProfProfiler};
use std::alloc::{GlobalAlloc, Layout, System};
use std::env;
use std::sync::atomic::{AtomicU64, Ordering};

const BROWSER_ACCEPT: &str =
    "text/html, application/xhtml+xml, application/xml;q=0.9, image/avif, image/webp, */*;q=0.8";
const BROWSER_LANGUAGE: &str = "nl-NL,nl;q=0.9,en-US;q=0.8,en;q=0.7,de;q=0.5";
const BROWSER_ENCODING: &str = "gzip, deflate, br, zstd";

static LARGE_ACCEPT_LINE: Lazy<String> = Lazy::new(|| {
    (0..256)
        .map(|idx| format!("application/x-bench-{idx:03};q=0.{};level={idx}", idx % 10))
        .collect::<Vec<_>>()
        .join(", ")
});

struct CountingAllocator {
    total_bytes: AtomicU64,
    allocations: AtomicU64,
}

impl CountingAllocator {
    const fn new() -> Self {
        Self {
            total_bytes: AtomicU64::new(0),
            allocations: AtomicU64::new(0),
        }
    }

    fn reset(&self) {
        self.total_bytes.store(0, Ordering::Relaxed);
        self.allocations.store(0, Ordering::Relaxed);
    }

    fn snapshot(&self) -> (u64, u64) {
        (
            self.total_bytes.load(Ordering::Relaxed),
            self.allocations.load(Ordering::Relaxed),
        )
    }
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            self.total_bytes
                .fetch_add(layout.size() as u64, Ordering::Relaxed);
            self.allocations.fetch_add(1, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let result = unsafe { System.realloc(ptr, layout, new_size) };
        if !result.is_null() {
            let delta = new_size.saturating_sub(layout.size()) as u64;
            self.total_bytes.fetch_add(delta, Ordering::Relaxed);
            self.allocations.fetch_add(1, Ordering::Relaxed);
        }
        result
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
    }
}

#[global_allocator]
static GLOBAL_ALLOCATOR: CountingAllocator = CountingAllocator::new();

fn browser_snapshot() -> RequestSnapshot {
    RequestSnapshot::from_headers([
        ("Host", "www.example.com"),
        ("User-Agent", "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/130.0"),
        ("Accept", BROWSER_ACCEPT),
        ("Accept-Language", BROWSER_LANGUAGE),
        ("Accept-Encoding", BROWSER_ENCODING),
        ("Cookie", "session=abc123; theme=dark; consent=yes"),
        ("X-Forwarded-For", "198.51.100.20"),
        ("X-Forwarded-Proto", "https"),
    ])
    .with_server("REMOTE_ADDR", "10.0.0.1")
    .with_server("REQUEST_METHOD", "GET")
    .with_server("REQUEST_URI", "/products/42?ref=bench")
    .with_server("SERVER_PORT", "8080")
}

fn bench_accept_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("accept_parsing");

    for (name, raw) in [
        ("browser_accept", BROWSER_ACCEPT),
        ("browser_language", BROWSER_LANGUAGE),
        ("browser_encoding", BROWSER_ENCODING),
        ("large_accept", LARGE_ACCEPT_LINE.as_str()),
    ] {
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", name), raw, |b, raw| {
            b.iter(|| black_box(AcceptList::parse(black_box(raw))))
        });
    }

    group.finish();
}

fn bench_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("context");
    let trusted = TrustedHosts::list(["10.0.0.1"]);

    group.bench_function("validate_trusted_proxy", |b| {
        b.iter_batched(
            browser_snapshot,
            |snapshot| black_box(RequestContext::new(snapshot, &trusted)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("validate_untrusted_proxy", |b| {
        b.iter_batched(
            browser_snapshot,
            |snapshot| black_box(RequestContext::new(snapshot, &TrustNone)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("derive_all_properties", |b| {
        b.iter_batched(
            || RequestContext::new(browser_snapshot(), &trusted),
            |ctx| {
                black_box(ctx.method());
                black_box(ctx.absolute_url().expect("url resolves"));
                black_box(ctx.accept_content_types().preferred());
                black_box(ctx.accept_languages().preferred());
                black_box(ctx.accept_encodings().len());
                ctx
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_allocation_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation_profile");
    group.sample_size(20);

    group.bench_function("browser_request", |b| {
        b.iter(|| {
            GLOBAL_ALLOCATOR.reset();
            let ctx = RequestContext::new(browser_snapshot(), &TrustNone);
            black_box(ctx.accept_content_types().len());
            black_box(GLOBAL_ALLOCATOR.snapshot());
        })
    });

    group.finish();
}

fn bench_request(c: &mut Criterion) {
    bench_accept_parsing(c);
    bench_context(c);
    bench_allocation_profile(c);
}

fn configure_criterion() -> Criterion {
    if env::var_os("BUNNER_PROFILE_FLAMEGRAPH").is_some() {
        Criterion::default().with_profiler(PProfProfiler::new(1000, Output::Flamegraph(None)))
    } else {
        Criterion::default()
    }
}

criterion_group!(
    name = bunner_request_rs_benches;
    config = configure_criterion();
    targets = bench_request
);
criterion_main!(bunner_request_rs_benches);
