//! Display behavior tests: sizing, lazy resources, materials, objects and
//! the frame loop, driven through recording test doubles.

use super::*;
use crate::config::DisplayConfig;
use crate::engine::{
    Camera, Color, LightKind, MountPoint, RenderResult, RenderSurface, Renderer, Scene, ShadowConfig, ShadowMode,
};
use crate::events::ListenerError;
use crate::foundation::math::Vec3;
use crate::material::{MaterialParams, MaterialRegistry, ParamValue};
use crate::object::{ObjectKind, ObjectQuery, RenderObjectBuilder};
use approx::assert_relative_eq;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    SetSize(f32, f32),
    Render { scene: String, camera: String },
    Shadows(bool),
    Listener,
}

type CallLog = Rc<RefCell<Vec<Call>>>;

struct RecordingRenderer {
    log: CallLog,
    size: (f32, f32),
    surface: Option<RenderSurface>,
    shadows: bool,
}

impl RecordingRenderer {
    fn boxed(log: &CallLog, surface: Option<RenderSurface>) -> Box<dyn Renderer> {
        Box::new(Self {
            log: Rc::clone(log),
            size: (1.0, 1.0),
            surface,
            shadows: false,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn set_size(&mut self, width: f32, height: f32) {
        self.size = (width, height);
        self.log.borrow_mut().push(Call::SetSize(width, height));
    }

    fn size(&self) -> (f32, f32) {
        self.size
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> RenderResult<()> {
        self.log.borrow_mut().push(Call::Render {
            scene: scene.name().to_string(),
            camera: camera.name().to_string(),
        });
        Ok(())
    }

    fn surface(&self) -> Option<RenderSurface> {
        self.surface
    }

    fn set_shadows(&mut self, enabled: bool, _mode: ShadowMode) {
        self.shadows = enabled;
        self.log.borrow_mut().push(Call::Shadows(enabled));
    }

    fn shadows_enabled(&self) -> bool {
        self.shadows
    }
}

#[derive(Default)]
struct RecordingMount {
    children: Vec<RenderSurface>,
}

impl MountPoint for RecordingMount {
    fn append_child(&mut self, surface: RenderSurface) {
        self.children.push(surface);
    }
}

fn record_events(display: &mut Display, kind: DisplayEventKind) -> Rc<RefCell<Vec<DisplayEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    display.on(kind, move |event| {
        sink.borrow_mut().push(event.clone());
        Ok(())
    });
    seen
}

fn count_updates(object: &mut crate::object::RenderObject) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    object.on_update(move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    });
    count
}

// ---------------------------------------------------------------
// Sizing
// ---------------------------------------------------------------

#[test]
fn test_set_size_emits_one_combined_event() {
    let mut display = Display::new("test");
    let resized = record_events(&mut display, DisplayEventKind::Resized);

    display.set_size(200, 400).unwrap();

    assert_eq!(display.size(), (200.0, 400.0));
    assert_eq!(
        *resized.borrow(),
        vec![DisplayEvent::Resized {
            width: 200.0,
            height: 400.0,
            old_width: 100.0,
            old_height: 100.0,
        }]
    );
}

#[test]
fn test_set_width_emits_only_on_change() {
    let mut display = Display::new("test");
    let resized = record_events(&mut display, DisplayEventKind::Resized);

    display.set_width(100.0).unwrap();
    assert!(resized.borrow().is_empty());

    display.set_width(150.0).unwrap();
    display.set_height(75).unwrap();
    assert_eq!(
        *resized.borrow(),
        vec![
            DisplayEvent::Resized { width: 150.0, height: 100.0, old_width: 100.0, old_height: 100.0 },
            DisplayEvent::Resized { width: 150.0, height: 75.0, old_width: 150.0, old_height: 100.0 },
        ]
    );
}

#[test]
fn test_small_width_changes_are_not_swallowed() {
    let mut display = Display::new("test");
    display.set_width(0.5).unwrap();
    let resized = record_events(&mut display, DisplayEventKind::Resized);

    display.set_width(0.500_000_06_f32).unwrap();

    assert_eq!(display.width(), 0.500_000_06_f32);
    assert_eq!(resized.borrow().len(), 1);
}

#[test]
fn test_invalid_dimensions_leave_size_unchanged() {
    let mut display = Display::new("test");
    let resized = record_events(&mut display, DisplayEventKind::Resized);

    assert!(matches!(
        display.set_width(0),
        Err(DisplayError::InvalidDimension { dimension: "width", .. })
    ));
    assert!(matches!(
        display.set_width("foo"),
        Err(DisplayError::InvalidDimension { dimension: "width", .. })
    ));
    assert!(matches!(
        display.set_height(f32::NAN),
        Err(DisplayError::InvalidDimension { dimension: "height", .. })
    ));
    assert!(display.set_size(50.0, -1.0).is_err());

    assert_eq!(display.size(), (100.0, 100.0));
    assert!(resized.borrow().is_empty());
}

#[test]
fn test_resize_reaches_renderer_before_listeners() {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let mut display = DisplayBuilder::new("test")
        .renderer(RecordingRenderer::boxed(&log, None))
        .build()
        .unwrap();
    let listener_log = Rc::clone(&log);
    display.on(DisplayEventKind::Resized, move |_| {
        listener_log.borrow_mut().push(Call::Listener);
        Ok(())
    });

    display.set_size(300, 200).unwrap();

    assert_eq!(*log.borrow(), vec![Call::SetSize(300.0, 200.0), Call::Listener]);
    assert_eq!(display.renderer().size(), (300.0, 200.0));
}

#[test]
fn test_camera_aspect_follows_size() {
    let mut display = Display::new("test");
    display.set_size(200, 400).unwrap();

    let camera = display.camera(None).unwrap();
    assert_relative_eq!(camera.aspect().unwrap(), 0.5);
    assert_eq!(camera.projection_updates(), 1);

    display.set_size(300, 200).unwrap();
    let camera = display.camera(None).unwrap();
    assert_relative_eq!(camera.aspect().unwrap(), 1.5);
    assert_eq!(camera.projection_updates(), 2);
}

#[test]
fn test_orthographic_camera_ignores_resize() {
    let mut display = Display::new("test");
    display
        .set_camera(Some("ortho"), Camera::orthographic(-1.0, 1.0, 1.0, -1.0, 0.1, 10.0))
        .unwrap();
    let before = *display.get_camera("ortho").unwrap().projection_matrix();

    display.set_size(400, 100).unwrap();

    let camera = display.get_camera("ortho").unwrap();
    assert!(camera.aspect().is_none());
    assert_relative_eq!(*camera.projection_matrix(), before);
}

// ---------------------------------------------------------------
// Scenes and cameras
// ---------------------------------------------------------------

#[test]
fn test_scenes_materialize_on_first_reference() {
    let mut display = Display::new("test");
    let added = record_events(&mut display, DisplayEventKind::SceneAdded);
    assert!(display.scenes().is_empty());

    assert_eq!(display.scene(None).unwrap().name(), "default");
    assert_eq!(display.scenes(), vec!["default"]);

    display.scene(Some("s2")).unwrap();
    display.scene(Some("s2")).unwrap();
    assert_eq!(display.scenes(), vec!["default", "s2"]);
    assert_eq!(
        *added.borrow(),
        vec![
            DisplayEvent::SceneAdded { name: "default".into() },
            DisplayEvent::SceneAdded { name: "s2".into() },
        ]
    );
}

#[test]
fn test_activated_scene_is_the_default() {
    let mut display = Display::new("test");
    display.scene(None).unwrap();
    display.scene(Some("s2")).unwrap();

    display.activate_scene("s2").unwrap();
    assert_eq!(display.scene(None).unwrap().name(), "s2");
    assert_eq!(display.default_scene(), Some("s2"));

    display.activate_scene("default").unwrap();
    assert_eq!(display.scene(None).unwrap().name(), "default");

    assert!(matches!(display.activate_scene("nope"), Err(DisplayError::UnknownScene(_))));
    assert!(matches!(display.get_scene("nope"), Err(DisplayError::UnknownScene(_))));
}

#[test]
fn test_set_scene_replaces_and_names() {
    let mut display = Display::new("test");
    let blue = Color::from_hex(0x0000ff);

    let scene = display.set_scene(Some("sky"), Scene::new().with_background(blue)).unwrap();
    assert_eq!(scene.name(), "sky");
    assert_eq!(display.get_scene("sky").unwrap().background, Some(blue));
}

#[test]
fn test_cameras_materialize_and_activate() {
    let mut display = Display::new("test");
    let added = record_events(&mut display, DisplayEventKind::CameraAdded);

    display.camera(None).unwrap();
    display.set_camera(Some("top"), Camera::default().at(Vec3::new(0.0, 10.0, 0.0))).unwrap();
    display.activate_camera("top").unwrap();

    assert_eq!(display.camera(None).unwrap().name(), "top");
    assert_eq!(display.cameras(), vec!["default", "top"]);
    assert_eq!(added.borrow().len(), 2);
    assert!(matches!(display.get_camera("side"), Err(DisplayError::UnknownCamera(_))));
}

// ---------------------------------------------------------------
// Materials
// ---------------------------------------------------------------

fn red() -> Color {
    Color::from_hex(0xff0000)
}

#[test]
fn test_material_inherits_from_parent() {
    let mut display = Display::new("test");
    display.mat_params("foo", &MaterialParams::new().with("color", "#ff0000")).unwrap();
    display.mat_params("bar", &MaterialParams::new().with_parent("foo")).unwrap();
    display
        .mat_params("baz", &MaterialParams::new().with_parent("foo").with("opacity", 1))
        .unwrap();

    let bar = display.mat_values("bar");
    assert_eq!(bar.get("color").and_then(ParamValue::as_color), Some(red()));

    let baz = display.material("baz").unwrap();
    assert_eq!(baz.color, red());
    assert_relative_eq!(baz.opacity, 1.0);
}

#[test]
fn test_existing_material_merges_updates() {
    let mut display = Display::new("test");
    display.mat("glass");
    display.mat_params("glass", &MaterialParams::new().with("opacity", 0.3)).unwrap();
    display.mat_attr("glass", "transparent", true).unwrap();

    let glass = display.get_mat("glass").unwrap();
    assert_eq!(glass.params().get("opacity"), Some(&ParamValue::Number(0.3)));
    assert_eq!(glass.params().get("transparent"), Some(&ParamValue::Bool(true)));

    assert!(display.find_mat("steel").is_none());
    assert!(matches!(display.get_mat("steel"), Err(DisplayError::UnknownMaterial(_))));
    assert!(display.find_mat("steel").is_none());
}

#[test]
fn test_mats_filter() {
    let mut display = Display::new("test");
    display.mat_params("a", &MaterialParams::new().with("wireframe", true)).unwrap();
    display.mat_params("b", &MaterialParams::new().with("wireframe", false)).unwrap();
    display.mat("c");

    let all: Vec<&str> = display.mats(None).iter().map(|m| m.name()).collect();
    assert_eq!(all, vec!["a", "b", "c"]);

    let filter = MaterialParams::new().with("wireframe", true);
    let wire: Vec<&str> = display.mats(Some(&filter)).iter().map(|m| m.name()).collect();
    assert_eq!(wire, vec!["a"]);
}

#[test]
fn test_refresh_reaches_dependents_and_linked_objects() {
    let mut display = Display::new("test");
    display.mat_params("foo", &MaterialParams::new().with("color", "#ff0000")).unwrap();
    display.mat_params("bar", &MaterialParams::new().with_parent("foo")).unwrap();
    let key = display.ro("cube").unwrap().key().unwrap();
    display.assign_material(key, "bar").unwrap();
    let refreshed = record_events(&mut display, DisplayEventKind::MaterialRefresh);

    display.mat_attr("foo", "color", "#00ff00").unwrap();

    assert_eq!(
        *refreshed.borrow(),
        vec![
            DisplayEvent::MaterialRefresh { name: "foo".into() },
            DisplayEvent::MaterialRefresh { name: "bar".into() },
        ]
    );
    let material = display.object(key).unwrap().material().unwrap();
    assert_eq!(material.color, Color::from_hex(0x00ff00));
}

#[test]
fn test_parent_attribute_changes_inheritance() {
    let mut display = Display::new("test");
    display.mat_params("foo", &MaterialParams::new().with("color", "#ff0000")).unwrap();
    display.mat("bar");
    assert!(display.mat_values("bar").get("color").is_none());

    display.mat_attr("bar", "parent", "foo").unwrap();

    let bar = display.get_mat("bar").unwrap();
    assert_eq!(bar.parent(), Some("foo"));
    assert!(bar.params().get("parent").is_none());
    assert_eq!(display.mat_values("bar").get("color").and_then(ParamValue::as_color), Some(red()));

    display.mat_attr("foo", "color", "#00ff00").unwrap();
    assert_eq!(display.material("bar").unwrap().color, Color::from_hex(0x00ff00));
}

#[test]
fn test_material_from_mat_refreshes_through_display() {
    let mut display = Display::new("test");
    assert!(display.mat("foo").params().is_empty());
    let key = display.ro("cube").unwrap().key().unwrap();
    display.assign_material(key, "foo").unwrap();
    let refreshed = record_events(&mut display, DisplayEventKind::MaterialRefresh);

    display.mat_attr("foo", "color", "#00ff00").unwrap();

    assert_eq!(*refreshed.borrow(), vec![DisplayEvent::MaterialRefresh { name: "foo".into() }]);
    let material = display.object(key).unwrap().material().unwrap();
    assert_eq!(material.color, Color::from_hex(0x00ff00));
    assert_eq!(display.mat("foo").params().get("color"), Some(&ParamValue::from("#00ff00")));
}

#[test]
fn test_shared_scope_sits_under_local_values() {
    let shared = Rc::new(RefCell::new(MaterialRegistry::new()));
    shared
        .borrow_mut()
        .get_or_create("base", MaterialParams::new().with("color", "#ff0000").with("shininess", 10));
    shared.borrow_mut().get_or_create("paint", MaterialParams::new().with("color", "#ff0000"));

    let mut display = Display::new("test").with_shared_materials(Rc::clone(&shared));
    display
        .mat_params("base", &MaterialParams::new().with("shininess", 80))
        .unwrap();
    display.mat_params("child", &MaterialParams::new().with_parent("paint")).unwrap();

    let base = display.mat_values("base");
    assert_eq!(base.get("color").and_then(ParamValue::as_color), Some(red()));
    assert_eq!(base.get("shininess"), Some(&ParamValue::Number(80.0)));

    let child = display.material("child").unwrap();
    assert_eq!(child.color, red());
    assert!(display.mat_values("unknown").is_empty());
}

#[test]
fn test_shadow_parameter_casts_shadow() {
    let mut display = Display::new("test");
    display.mat_params("ground", &MaterialParams::new().with("shadow", true)).unwrap();
    let key = display.ro("floor").unwrap().key().unwrap();

    display.assign_material(key, "ground").unwrap();

    assert!(display.object(key).unwrap().node().cast_shadow);
    assert!(matches!(
        display.assign_material(key, "missing"),
        Err(DisplayError::UnknownMaterial(_))
    ));
}

// ---------------------------------------------------------------
// Render objects
// ---------------------------------------------------------------

#[test]
fn test_ro_registers_named_object() {
    let mut display = Display::new("test");

    let object = display.ro("foo").unwrap();
    assert_eq!(object.name(), "foo");
    assert_eq!(object.scene_name(), Some("default"));
    assert_eq!(object.display_name(), Some("test"));

    object.rename("bar").at(Vec3::new(1.0, 2.0, 3.0)).rgb(0.0, 1.0, 0.0);
    let key = object.key().unwrap();

    let object = display.object(key).unwrap();
    assert_eq!(object.name(), "bar");
    assert_eq!(object.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(object.color(), Color::from_rgb(0.0, 1.0, 0.0));
    assert_eq!(display.get_scene("default").unwrap().len(), 1);
}

#[test]
fn test_remove_detaches_from_scene_and_list() {
    let mut display = Display::new("test");
    let keep = display.ro("keep").unwrap().key().unwrap();
    let gone = display.ro("gone").unwrap().key().unwrap();

    let removed = display.remove(gone).unwrap();

    assert!(removed.key().is_none());
    assert!(removed.scene_name().is_none());
    let names: Vec<&str> = display.objects().iter().map(|o| o.name()).collect();
    assert_eq!(names, vec!["keep"]);
    assert_eq!(display.object_keys(), &[keep]);

    let scene = display.get_scene("default").unwrap();
    assert_eq!(scene.len(), 1);
    assert!(!scene.contains(removed.shared_node()));
    assert!(matches!(display.remove(gone), Err(DisplayError::UnknownObject)));
}

#[test]
fn test_add_targets_named_scene() {
    let mut display = Display::new("test");
    let object = RenderObjectBuilder::named_new("moon").build().unwrap();

    display.add(object, Some("night")).unwrap();

    assert_eq!(display.scenes(), vec!["night"]);
    assert_eq!(display.get_scene("night").unwrap().len(), 1);
}

#[test]
fn test_light_by_type_name() {
    let mut display = Display::new("test");

    let sun = display.light("sun", Some("key light")).unwrap();
    assert_eq!(sun.name(), "key light");
    assert_eq!(sun.kind(), ObjectKind::Light);
    assert_eq!(sun.node().light().unwrap().kind, LightKind::Directional);

    sun.configure_shadow(&ShadowConfig { cheight: Some(20.0), far: Some(100.0), ..ShadowConfig::default() });
    let shadow = sun.node().light().unwrap().shadow;
    assert_relative_eq!(shadow.top, 20.0);
    assert_relative_eq!(shadow.bottom, -20.0);
    assert_relative_eq!(shadow.far, 100.0);

    assert!(matches!(display.light("laser", None), Err(DisplayError::UnknownLightType(_))));
}

#[test]
fn test_find_by_attributes() {
    let mut display = Display::new("test");
    display.ro("a").unwrap();
    display.ro(RenderObjectBuilder::named_new("b").update_on_animate(false)).unwrap();
    display.light("point", Some("lamp")).unwrap();

    let lights = display.find(&ObjectQuery::new().kind(ObjectKind::Light));
    assert_eq!(lights.len(), 1);
    assert_eq!(lights[0].name(), "lamp");

    let frozen = display.find(&ObjectQuery::new().update_on_animate(false));
    assert_eq!(frozen.len(), 1);
    assert_eq!(frozen[0].name(), "b");

    assert_eq!(display.find(&ObjectQuery::new().scene("default")).len(), 3);
}

#[test]
fn test_strict_builder_error_surfaces_through_ro() {
    let mut display = Display::new("test");
    let result = display.ro(RenderObjectBuilder::named_new("x").strict());

    assert!(matches!(result, Err(DisplayError::MissingGeometryOrMaterial)));
    assert!(display.objects().is_empty());
}

// ---------------------------------------------------------------
// Frame loop
// ---------------------------------------------------------------

#[test]
fn test_update_respects_update_on_animate() {
    let mut display = Display::new("test");
    let eager = count_updates(display.ro("eager").unwrap());
    let lazy = count_updates(display.ro(RenderObjectBuilder::named_new("lazy").update_on_animate(false)).unwrap());

    display.animate(0.0).unwrap();
    assert_eq!((eager.get(), lazy.get()), (1, 0));

    display.update(false).unwrap();
    assert_eq!((eager.get(), lazy.get()), (2, 1));
}

#[test]
fn test_animate_notifies_then_renders() {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let mut display = DisplayBuilder::new("test")
        .renderer(RecordingRenderer::boxed(&log, None))
        .build()
        .unwrap();
    let ticks = record_events(&mut display, DisplayEventKind::Animate);
    let seen_t = Rc::new(Cell::new(0.0));
    let object_t = Rc::clone(&seen_t);
    display.ro("spinner").unwrap().on_animate(move |event| {
        if let crate::object::ObjectEvent::Animate { t, .. } = event {
            object_t.set(*t);
        }
        Ok(())
    });

    display.animate(16.0).unwrap();

    assert_eq!(*ticks.borrow(), vec![DisplayEvent::Animate { t: 16.0 }]);
    assert_relative_eq!(seen_t.get(), 16.0);
    assert_eq!(
        *log.borrow(),
        vec![Call::Render { scene: "default".into(), camera: "default".into() }]
    );
}

#[test]
fn test_inactive_display_animates_without_rendering() {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let mut display = DisplayBuilder::new("test")
        .renderer(RecordingRenderer::boxed(&log, None))
        .build()
        .unwrap();
    let updates = count_updates(display.ro("a").unwrap());

    display.set_active(false);
    display.animate(1.0).unwrap();
    display.set_active(true);
    display.set_update_on_animate(false);
    display.animate(2.0).unwrap();

    assert_eq!(updates.get(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_failing_hook_aborts_the_pass() {
    let mut display = Display::new("test");
    display
        .ro("broken")
        .unwrap()
        .on_update(|_| Err(ListenerError::new("boom")));
    let after = count_updates(display.ro("after").unwrap());

    let result = display.animate(0.0);

    assert!(matches!(result, Err(DisplayError::Listener(_))));
    assert_eq!(after.get(), 0);
}

#[test]
fn test_render_uses_default_renderer() {
    let mut display = Display::new("test");
    assert!(!display.has_renderer());

    display.render(None, Some("other")).unwrap();

    assert!(display.has_renderer());
    assert_eq!(display.scenes(), vec!["other"]);
    assert_eq!(display.cameras(), vec!["default"]);
    assert_eq!(display.renderer().size(), (100.0, 100.0));
}

#[test]
fn test_append_requires_surface() {
    let mut display = Display::new("test");
    let mut mount = RecordingMount::default();
    display.append(&mut mount).unwrap();
    assert_eq!(mount.children.len(), 1);

    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let mut blind = DisplayBuilder::new("blind")
        .renderer(RecordingRenderer::boxed(&log, None))
        .build()
        .unwrap();
    assert!(matches!(blind.append(&mut mount), Err(DisplayError::NoRenderSurface)));
    assert_eq!(mount.children.len(), 1);
}

#[test]
fn test_shadows_toggle_renderer() {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let mut display = DisplayBuilder::new("test")
        .renderer(RecordingRenderer::boxed(&log, Some(RenderSurface(7))))
        .build()
        .unwrap();

    display.shadows(true, ShadowMode::PcfSoft);

    assert!(display.renderer().shadows_enabled());
    assert_eq!(*log.borrow(), vec![Call::Shadows(true)]);
}

#[test]
fn test_destroy_emits_terminal_event() {
    let mut display = Display::new("doomed");
    let destroyed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&destroyed);
    display.once(DisplayEventKind::Destroy, move |event| {
        assert_eq!(event, &DisplayEvent::Destroy { name: "doomed".into() });
        flag.set(true);
        Ok(())
    });

    display.destroy().unwrap();
    assert!(destroyed.get());
}

// ---------------------------------------------------------------
// Construction
// ---------------------------------------------------------------

#[test]
fn test_builder_applies_options() {
    let display = Display::builder("test")
        .width(200.0)
        .height(400.0)
        .camera(Camera::perspective(60.0, 1.0, 100.0))
        .scene(Scene::new().with_background(red()))
        .build()
        .unwrap();

    assert_eq!(display.size(), (200.0, 400.0));
    assert_relative_eq!(display.get_camera("default").unwrap().aspect().unwrap(), 0.5);
    assert_eq!(display.get_scene("default").unwrap().background, Some(red()));
}

#[test]
fn test_builder_rejects_bad_width() {
    let result = Display::builder("test").width(0.0).build();
    assert!(matches!(result, Err(DisplayError::InvalidDimension { dimension: "width", .. })));
}

#[test]
fn test_builder_from_config() {
    let config: DisplayConfig = toml::from_str(
        r##"
        name = "configured"
        width = 320
        height = 160
        update_on_animate = false

        [scene]
        background = "#102030"

        [materials.metal]
        color = "#ff0000"
        shininess = 90

        [materials.rusty]
        parent = "metal"
        "##,
    )
    .unwrap();

    let display = DisplayBuilder::from_config(config).build().unwrap();

    assert_eq!(display.name(), "configured");
    assert_eq!(display.size(), (320.0, 160.0));
    assert!(!display.update_on_animate());
    assert_eq!(display.scenes(), vec!["default"]);
    assert!(display.cameras().is_empty());
    assert_eq!(display.material("rusty").unwrap().color, red());
}

#[test]
fn test_config_with_bad_background_fails() {
    let config = DisplayConfig {
        scene: Some(crate::config::SceneConfig { background: Some("nope".into()) }),
        ..DisplayConfig::default()
    };
    assert!(matches!(
        DisplayBuilder::from_config(config).build(),
        Err(DisplayError::Config(_))
    ));
}
