extern crate tgaraster;

use tgaraster::{img_diff, render_to_file, Color, Format, LineMode, Mesh, MeshSource,
                PixelBuffer, RenderConfig, RenderMode};

const OBJ: &str = "\
# Octahedron
v  0.0  0.5  0.0
v  0.5  0.0  0.0
v  0.0  0.0  0.5
v -0.5  0.0  0.0
v  0.0  0.0 -0.5
v  0.0 -0.5  0.0
f 1/1/1 2/1/1 3/1/1
f 1/1/1 3/1/1 4/1/1
f 1/1/1 4/1/1 5/1/1
f 1/1/1 5/1/1 2/1/1
f 6 3 2
f 6 4 3
f 6 5 4
f 6 2 5
";

#[test]
fn wireframe_to_tga() {
    let mesh = Mesh::from_obj(OBJ.as_bytes()).unwrap();
    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.face_count(), 8);

    let config = RenderConfig::new(100, 100).line_mode(LineMode::Exact);
    let path = std::env::temp_dir().join("tgaraster_wireframe.tga");
    let pix = render_to_file(&mesh, &config, &path).unwrap();
    let back = PixelBuffer::read_tga_file(&path).unwrap();
    assert_eq!(back, pix);
    // Vertical edge from (50,25) to (50,75), origin is bottom left
    assert_eq!(back.get(50, 100 - 1 - 75), Color::rgb(255,255,255));
    assert_eq!(back.get(50, 100 - 1 - 25), Color::rgb(255,255,255));
    assert_eq!(back.get(50, 100 - 1 - 80), Color::rgb(0,0,0));
    assert_eq!(back.get(0, 0), Color::rgb(0,0,0));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn filled_to_png() {
    let mesh = Mesh::from_obj(OBJ.as_bytes()).unwrap();
    let config = RenderConfig::new(64, 64)
        .format(Format::Rgba)
        .mode(RenderMode::Filled)
        .line_mode(LineMode::AntiAliased)
        .fill(Color::rgba(0, 0, 255, 255))
        .stroke(Some(Color::rgba(255, 255, 0, 255)))
        .background(Color::rgba(0, 0, 0, 255));
    let dir = std::env::temp_dir();
    let png = dir.join("tgaraster_filled.png");
    let tga = dir.join("tgaraster_filled.tga");
    let pix = render_to_file(&mesh, &config, &png).unwrap();
    render_to_file(&mesh, &config, &tga).unwrap();
    // Inside the faces, away from every edge
    assert_eq!(pix.get(38, 63 - 38), Color::rgba(0, 0, 255, 255));
    assert_eq!(pix.get(1, 1), Color::rgba(0, 0, 0, 255));

    let copy = dir.join("tgaraster_filled_copy.png");
    tgaraster::write_png(&PixelBuffer::read_tga_file(&tga).unwrap(), &copy).unwrap();
    assert!(img_diff(&png, &copy).unwrap());
    for p in [png, tga, copy].iter() {
        std::fs::remove_file(p).unwrap();
    }
}
