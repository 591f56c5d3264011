use trirender::color::{BLACK, BLUE, Color, GREEN, RED, WHITE};
use trirender::config::{Config, ShadingMode};
use trirender::depth::DepthBuffer;
use trirender::mesh::Mesh;
use trirender::raster::draw_triangle;
use trirender::renderer::{Renderer, Scene};
use trirender::screen::{BmpSnapshot, PixelSurface, Presenter};
use trirender::shader::Shading;
use trirender::texture::Texture;
use trirender::triangle::Triangle;
use trirender::point3d::Point3D;

// Two squares facing +z: a near one (z = 0.5) on the left half and a far one
// (z = -0.5) spanning the whole view. UVs cover the unit square.
const LAYERS: &str = "\
v -1 -1 -0.5
v 1 -1 -0.5
v 1 1 -0.5
v -1 1 -0.5
v -1 -1 0.5
v 0 -1 0.5
v 0 1 0.5
v -1 1 0.5
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1 4/4/1
f 5/1/1 6/2/1 7/3/1 8/4/1
";

fn config(shading: ShadingMode) -> Config {
    let mut config = Config::default();
    config.window.width = 100;
    config.window.height = 100;
    config.render.viewport_margin = 0.1;
    config.render.shading = shading;
    config.render.base_color = GREEN;
    config.camera.eye = [0.0, 0.0, 5.0];
    config
}

#[test_log::test]
fn near_square_hides_far_square() {
    let config = config(ShadingMode::FlatLit);
    let mut renderer = Renderer::from_config(&config);
    let scene = Scene::new(Mesh::parse(LAYERS).unwrap(), None, &config).unwrap();

    let stats = renderer.render(&scene);
    assert_eq!(stats.faces, 4);
    assert_eq!(stats.drawn, 4);
    assert_eq!(stats.culled, 0);

    // near square covers the left half, far square still shows on the right
    let depth = renderer.depth();
    let left = depth.get(depth.index(30, 50)).unwrap();
    let right = depth.get(depth.index(70, 50)).unwrap();
    assert!(left > right, "near {left} should beat far {right}");
    assert_eq!(renderer.surface().get(30, 50), Some(GREEN));
    assert_eq!(renderer.surface().get(70, 50), Some(GREEN));
    assert_eq!(renderer.surface().get(2, 2), Some(BLACK));
}

#[test]
fn textured_layers_sample_the_texture() {
    // bottom row: RED GREEN, top row: BLUE WHITE
    let texture = Texture::from_pixels(2, 2, vec![RED, GREEN, BLUE, WHITE]).unwrap();
    let config = config(ShadingMode::Textured);
    let mut renderer = Renderer::from_config(&config);
    let scene = Scene::new(Mesh::parse(LAYERS).unwrap(), Some(texture), &config).unwrap();
    renderer.render(&scene);

    let surface = renderer.surface();
    // right half belongs to the far square: bottom right is GREEN, top right WHITE
    assert_eq!(surface.get(80, 20), Some(GREEN));
    assert_eq!(surface.get(80, 80), Some(WHITE));
    // the near square maps the whole texture onto the left half
    assert_eq!(surface.get(20, 20), Some(RED));
    assert_eq!(surface.get(20, 80), Some(BLUE));
    assert_eq!(surface.get(45, 80), Some(WHITE));
}

#[test]
fn submission_order_does_not_change_the_winner() {
    let near = Triangle::new(
        Point3D::new(5.0, 5.0, 0.9),
        Point3D::new(60.0, 5.0, 0.9),
        Point3D::new(5.0, 60.0, 0.9),
    );
    let far = Triangle::new(
        Point3D::new(0.0, 0.0, 0.2),
        Point3D::new(64.0, 0.0, 0.2),
        Point3D::new(0.0, 64.0, 0.2),
    );
    let draw = |order: [(&Triangle, Color); 2]| {
        let mut surface = PixelSurface::new(64, 64);
        surface.clear(BLACK);
        let mut depth = DepthBuffer::new(64, 64);
        for (triangle, color) in order {
            draw_triangle(&mut surface, &mut depth, triangle, &Shading::Flat(color));
        }
        surface.memory().to_vec()
    };
    assert_eq!(draw([(&near, RED), (&far, BLUE)]), draw([(&far, BLUE), (&near, RED)]));
}

#[test]
fn snapshot_writes_a_bmp() {
    let config = config(ShadingMode::Smooth);
    let mut renderer = Renderer::from_config(&config);
    let scene = Scene::new(Mesh::parse(LAYERS).unwrap(), None, &config).unwrap();
    renderer.render(&scene);

    let path = std::env::temp_dir().join(format!("trirender-{}.bmp", std::process::id()));
    let mut snapshot = BmpSnapshot { path: path.clone() };
    snapshot.present(renderer.surface()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(&bytes[..2], b"BM");
    // 100 pixel rows of 300 bytes, already 4-byte aligned
    assert_eq!(bytes.len(), 54 + 300 * 100);
    assert_eq!(i32::from_le_bytes(bytes[18..22].try_into().unwrap()), 100);
}
