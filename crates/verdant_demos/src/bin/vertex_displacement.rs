//! A field of instanced grass blades swaying in the wind under one
//! directional light. Fly with WASD + Space/Ctrl, hold the right mouse
//! button to look around.
use anyhow::Context as _;
use verdant_app::{
    primitives, App, AppContext, CameraMode, CameraRig, Color, ConfigFile, DirectionalLight,
    GpuMesh, Mat4, Material, MaterialDesc, MaterialShader, Renderer, Vec3, VerdantApp,
    DEFAULT_CONFIG_PATH,
};
use verdant_core::Camera;
use verdant_demos::grass::{GrassFieldConfig, SWAY_SHADER};

struct GrassField {
    config: GrassFieldConfig,
    rig: CameraRig,
    transforms: Vec<Mat4>,
    blade: Option<GpuMesh>,
    material: Option<Material>,
}

impl GrassField {
    fn new(config: GrassFieldConfig) -> Self {
        Self {
            config,
            rig: CameraRig::new(CameraMode::Free),
            transforms: Vec::new(),
            blade: None,
            material: None,
        }
    }
}

impl VerdantApp for GrassField {
    fn setup(&mut self, ctx: &mut AppContext) -> anyhow::Result<()> {
        let (width, height) = ctx.window_size;
        let renderer = ctx.renderer().context("renderer not available during setup")?;

        let mut camera = Camera::looking_at(Vec3::new(10.0, 5.0, 10.0), Vec3::new(0.0, 1.0, 0.0), 60.0);
        camera.set_viewport_size(width, height);
        renderer.camera = camera;
        renderer.set_light(
            DirectionalLight::new(Vec3::new(20.0, 20.0, 0.0), Vec3::ZERO, Color::WHITE).with_ambient(0.2),
        );

        let mut mesh = primitives::grass_blade()?;
        self.blade = Some(renderer.upload_mesh("grass blade", &mut mesh, false)?);
        // GPU copy is all we need from here on
        mesh.release();

        let shader = if self.config.sway {
            MaterialShader::custom("grass sway", SWAY_SHADER)
        } else {
            MaterialShader::Lit
        };
        self.material = Some(renderer.create_material(
            MaterialDesc::lit("grass", Color::GREEN)
                .with_shader(shader)
                .double_sided(true),
        )?);

        self.transforms = self.config.blade_transforms();
        log::info!("scattered {} grass blades", self.transforms.len());
        Ok(())
    }

    fn update(&mut self, ctx: &mut AppContext) {
        let dt = ctx.time.delta;
        if let Some(renderer) = ctx.renderer.as_deref_mut() {
            self.rig.update(&mut renderer.camera, ctx.input, dt);
        }
    }

    fn draw_3d(&mut self, renderer: &mut Renderer, _ctx: &mut AppContext) -> anyhow::Result<()> {
        let (Some(blade), Some(material)) = (&self.blade, &self.material) else {
            return Ok(());
        };
        renderer.draw_mesh_instanced(blade, material, &self.transforms, self.transforms.len())?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let file = ConfigFile::load(DEFAULT_CONFIG_PATH)?;
    let mut config = file.app()?;
    if !file.has_key("title") {
        config.title = "Grass Blade Mesh".to_string();
    }
    verdant_app::logging::init(config.log_level)?;
    if file.found() {
        log::info!("loaded config from {}", file.path().display());
    }
    let grass: GrassFieldConfig = file.section("grass")?;

    App::new(GrassField::new(grass)).with_config(config).run()
}
