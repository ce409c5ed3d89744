use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastly::prelude::*;

const BUFFER_WIDTH: u32 = 512;
const BUFFER_HEIGHT: u32 = 512;

fn triangle_mesh(corners: [Vec3; 3]) -> Mesh {
    Mesh::new(
        corners.to_vec(),
        Vec::new(),
        vec![Face {
            vertices: [0, 1, 2],
            normals: [0, 1, 2],
        }],
    )
}

fn small_triangle() -> Mesh {
    triangle_mesh([
        Vec3::new(-0.04, -0.04, 0.0),
        Vec3::new(0.04, -0.04, 0.0),
        Vec3::new(0.0, 0.04, 0.0),
    ])
}

fn medium_triangle() -> Mesh {
    triangle_mesh([
        Vec3::new(-0.2, -0.2, 0.0),
        Vec3::new(0.2, -0.2, 0.0),
        Vec3::new(0.0, 0.2, 0.0),
    ])
}

fn large_triangle() -> Mesh {
    triangle_mesh([
        Vec3::new(-0.8, -0.8, 0.0),
        Vec3::new(0.8, -0.8, 0.0),
        Vec3::new(0.0, 0.8, 0.0),
    ])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let viewport = Viewport::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    let rasterizer = Rasterizer::default();

    for (name, mesh) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("render", name), &mesh, |b, mesh| {
            let mut buffer = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| {
                buffer.clear();
                rasterizer.render(black_box(mesh), &viewport, &mut buffer);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let viewport = Viewport::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    let rasterizer = Rasterizer::default();

    // A 20x20 grid of small triangles spread across the NDC square
    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    for row in 0..20 {
        for col in 0..20 {
            let x = -1.0 + (col as f32 + 0.5) * 0.1;
            let y = -1.0 + (row as f32 + 0.5) * 0.1;
            let base = vertices.len();
            vertices.push(Vec3::new(x - 0.04, y - 0.04, 0.0));
            vertices.push(Vec3::new(x + 0.04, y - 0.04, 0.0));
            vertices.push(Vec3::new(x, y + 0.04, 0.0));
            faces.push(Face {
                vertices: [base, base + 1, base + 2],
                normals: [base, base + 1, base + 2],
            });
        }
    }
    let mesh = Mesh::new(vertices, Vec::new(), faces);

    group.bench_function("render_400_triangles", |b| {
        let mut buffer = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            buffer.clear();
            rasterizer.render(black_box(&mesh), &viewport, &mut buffer);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
