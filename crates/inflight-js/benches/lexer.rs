use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use inflight_js::{JsLexer, tokenize};
use std::hint::black_box;

const SNIPPET: &str = r#"
// Analytics bootstrap
(function (w, d) {
  var queue = w.q = w.q || [], re = /^utm_[a-z]+$/i, ratio = w.innerWidth / 2;
  for (var i = 0; i < queue.length; ++i) {
    if (re.test(queue[i].name)) { queue[i].value += "é"; }
  }
  /* schedule the flush */
  d.addEventListener('load', function () { w.flush && w.flush(); });
})(window, document);
"#;

fn script_of(copies: usize) -> Vec<u8> {
    SNIPPET.repeat(copies).into_bytes()
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for copies in [1, 16, 256] {
        let script = script_of(copies);
        group.throughput(Throughput::Bytes(script.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(copies), &script, |b, script| {
            b.iter(|| tokenize(black_box(script)).tokens.len())
        });
    }
    group.finish();
}

fn bench_reused_lexer(c: &mut Criterion) {
    let script = script_of(16);
    let mut lexer = JsLexer::new();
    c.bench_function("reused_lexer_count", |b| {
        b.iter(|| {
            lexer.lex(black_box(&script));
            let mut count = 0usize;
            while !lexer.next_token().is_end() {
                count += 1;
            }
            count
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_reused_lexer);
criterion_main!(benches);
