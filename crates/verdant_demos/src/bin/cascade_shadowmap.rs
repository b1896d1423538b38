//! A lit ground plane with four coloured cubes and a reference grid, seen
//! from a camera that orbits the origin.
use anyhow::Context as _;
use verdant_app::{
    primitives, App, AppContext, CameraRig, Color, ConfigFile, DirectionalLight, GpuLines, GpuMesh,
    Mat4, Material, MaterialDesc, Renderer, Vec3, VerdantApp, DEFAULT_CONFIG_PATH,
};
use verdant_core::Camera;
use verdant_demos::showcase::{self, CUBES, CUBE_SIZE, GRID_SLICES, GRID_SPACING, GROUND_SIZE};

struct Scene {
    plane: GpuMesh,
    plane_material: Material,
    cube: GpuMesh,
    cube_materials: Vec<Material>,
    grid: GpuLines,
}

#[derive(Default)]
struct Showcase {
    rig: Option<CameraRig>,
    scene: Option<Scene>,
}

impl VerdantApp for Showcase {
    fn setup(&mut self, ctx: &mut AppContext) -> anyhow::Result<()> {
        let (width, height) = ctx.window_size;
        let renderer = ctx.renderer().context("renderer not available during setup")?;

        let mut camera = Camera::looking_at(Vec3::new(0.0, 10.0, 10.0), Vec3::ZERO, 60.0);
        camera.set_viewport_size(width, height);
        renderer.camera = camera;
        renderer.set_light(DirectionalLight::new(Vec3::new(10.0, 10.0, 0.0), Vec3::ZERO, Color::WHITE));

        let plane = renderer.upload_mesh(
            "ground",
            &mut primitives::plane(GROUND_SIZE, GROUND_SIZE)?,
            false,
        )?;
        let cube = renderer.upload_mesh(
            "cube",
            &mut primitives::cube(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)?,
            false,
        )?;
        let plane_material = renderer.create_material(MaterialDesc::lit("ground", Color::WHITE))?;
        let cube_materials = CUBES
            .iter()
            .enumerate()
            .map(|(i, (_, color))| renderer.create_material(MaterialDesc::lit(format!("cube {i}"), *color)))
            .collect::<Result<Vec<_>, _>>()?;
        let grid = renderer.upload_lines("grid", &primitives::grid(GRID_SLICES, GRID_SPACING))?;

        self.rig = Some(CameraRig::orbital());
        self.scene = Some(Scene {
            plane,
            plane_material,
            cube,
            cube_materials,
            grid,
        });
        Ok(())
    }

    fn update(&mut self, ctx: &mut AppContext) {
        let dt = ctx.time.delta;
        if let (Some(rig), Some(renderer)) = (&self.rig, ctx.renderer.as_deref_mut()) {
            rig.update(&mut renderer.camera, ctx.input, dt);
        }
    }

    fn draw_3d(&mut self, renderer: &mut Renderer, _ctx: &mut AppContext) -> anyhow::Result<()> {
        let Some(scene) = &self.scene else {
            return Ok(());
        };
        renderer.draw_mesh(&scene.plane, &scene.plane_material, Mat4::IDENTITY)?;
        for ((position, _), material) in CUBES.iter().zip(&scene.cube_materials) {
            renderer.draw_mesh(&scene.cube, material, showcase::cube_transform(*position))?;
        }
        renderer.draw_lines(&scene.grid);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let file = ConfigFile::load(DEFAULT_CONFIG_PATH)?;
    let mut config = file.app()?;
    if !file.has_key("title") {
        config.title = "Cascaded Shadow Maps".to_string();
    }
    if !file.has_key("height") {
        config.height = 450;
    }
    verdant_app::logging::init(config.log_level)?;
    if file.found() {
        log::info!("loaded config from {}", file.path().display());
    }

    App::new(Showcase::default()).with_config(config).run()
}
