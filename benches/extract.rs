// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use water_trends::{
    chart::ChartConfig,
    config::{options::SourceOrder, style::ChartStyle},
    extract::extract_series,
    table::Table,
};

/// A history page with `n` samples, newest first.
fn sample_page(n: usize) -> String {
    let mut html = String::from(
        "<html><body><canvas id=\"trendChart\"></canvas><table id=\"dataTable\">\
         <thead><tr><th>Sample Date &amp; Time</th><th>pH</th><th>TDS</th><th>Ca</th><th>Mg</th>\
         <th>K</th><th>Na</th><th>SO4</th><th>Cl</th><th>Verdict</th></tr></thead><tbody>",
    );
    for i in (0..n).rev() {
        html.push_str(&format!(
            "<tr><td>2024-01-{:02}&nbsp;09:00</td><td>{:.1}</td><td>{}</td><td>40</td><td>10</td>\
             <td>5</td><td>15</td><td>30</td><td>20</td><td><span>Good</span></td></tr>",
            i % 28 + 1,
            6.5 + (i % 10) as f64 * 0.1,
            100 + i % 50,
        ));
    }
    html.push_str("</tbody></table></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let page = sample_page(500);
    let table = Table::from_html(&page, "dataTable").unwrap_or_default();
    let style = ChartStyle::default();

    c.bench_function("table_from_html_500", |b| {
        b.iter(|| {
            let t = Table::from_html(black_box(&page), "dataTable");
            black_box(t.map(|t| t.rows.len()))
        })
    });

    c.bench_function("extract_series_500", |b| {
        b.iter(|| {
            let ex = extract_series(black_box(&table.rows), SourceOrder::NewestFirst, None);
            black_box(ex.set.len())
        })
    });

    c.bench_function("chart_config_500", |b| {
        let ex = extract_series(&table.rows, SourceOrder::NewestFirst, None);
        b.iter(|| {
            let cfg = ChartConfig::line(black_box(&ex.set), &style);
            black_box(cfg.data.datasets.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
