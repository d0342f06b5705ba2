//! Selection2Collection CLI - drive the add-on against a demo scene.

use std::env;

use glam::Vec3;
use tracing_subscriber::prelude::*;

use sel2coll::addon;
use sel2coll::core::CollectionId;
use sel2coll::ops::selection_to_collection;
use sel2coll::prelude::*;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut log_level = "warn";
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => log_level = "debug",
            "-vv" | "--trace" => log_level = "trace",
            "-q" | "--quiet" => log_level = "error",
            _ => filtered_args.push(arg),
        }
    }

    init_tracing(log_level);

    if filtered_args.is_empty() {
        print_usage(&args[0]);
        return;
    }

    match filtered_args[0] {
        "demo" | "d" => {
            let opts = match DemoOptions::parse(&filtered_args[1..]) {
                Ok(opts) => opts,
                Err(e) => {
                    eprintln!("{}", e);
                    eprintln!("Usage: {} demo [--name <name>] [--cancel] [--empty] [--outliner] [--menu]", args[0]);
                    std::process::exit(1);
                }
            };
            cmd_demo(&opts);
        }
        "info" | "i" => cmd_info(),
        "tree" | "t" => cmd_tree(filtered_args[1..].contains(&"--json")),
        "version" | "V" => cmd_version(),
        "help" | "h" | "-h" | "--help" => print_usage(&args[0]),
        _ => {
            eprintln!("Unknown command: {}", filtered_args[0]);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).without_time());
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn print_usage(prog: &str) {
    println!("Selection2Collection - group selected objects into a new collection");
    println!();
    println!("Usage: {} [options] <command>", prog);
    println!();
    println!("Commands:");
    println!("  d, demo     Run the add-on against a demo scene");
    println!("  i, info     Show add-on metadata and registrations");
    println!("  t, tree     Print the demo scene hierarchy");
    println!("  V, version  Show version");
    println!("  h, help     Show this help");
    println!();
    println!("Demo options:");
    println!("  --name <name>  Collection name to enter in the dialog");
    println!("  --cancel       Dismiss the dialog instead of confirming");
    println!("  --empty        Clear the selection first");
    println!("  --outliner     Press the shortcut in the outliner");
    println!("  --menu         Use the menu entry instead of the shortcut");
    println!();
    println!("Options:");
    println!("  --json         JSON output (tree)");
    println!("  -v, --verbose  Debug logging");
    println!("  -vv, --trace   Trace logging");
    println!("  -q, --quiet    Errors only");
}

/// Options of the demo command.
#[derive(Default)]
struct DemoOptions {
    name: Option<String>,
    cancel: bool,
    empty: bool,
    outliner: bool,
    menu: bool,
}

impl DemoOptions {
    fn parse(args: &[&str]) -> Result<Self> {
        let mut opts = Self::default();
        let mut i = 0;
        while i < args.len() {
            match args[i] {
                "--name" => {
                    i += 1;
                    let Some(value) = args.get(i) else {
                        return Err(Error::other("--name needs a value"));
                    };
                    opts.name = Some((*value).to_string());
                }
                "--cancel" => opts.cancel = true,
                "--empty" => opts.empty = true,
                "--outliner" => opts.outliner = true,
                "--menu" => opts.menu = true,
                other => return Err(Error::other(format!("Unknown demo option: {}", other))),
            }
            i += 1;
        }
        Ok(opts)
    }
}

/// A small scene to run the operator against.
///
/// Suzanne sits in a second collection so the demo shows a move out of
/// several memberships at once. Cube, Sphere, and Suzanne start selected.
fn demo_scene() -> Result<Scene> {
    let mut scene = Scene::new("Demo");
    let cube = scene.add_object("Cube");
    let sphere = scene.add_object_at("Sphere", Vec3::new(3.0, 0.0, 0.0));
    let suzanne = scene.add_object_at("Suzanne", Vec3::new(-3.0, 0.0, 0.0));
    scene.add_object_at("Camera", Vec3::new(7.0, -7.0, 5.0));
    scene.add_object_at("Light", Vec3::new(4.0, 1.0, 6.0));

    let props = scene.create_collection("Props");
    let root = scene.root_collection();
    scene.link_collection(root, props)?;
    scene.link_object(props, suzanne)?;

    scene.select([cube, sphere, suzanne]);
    Ok(scene)
}

fn cmd_demo(opts: &DemoOptions) {
    let mut scene = match demo_scene() {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Failed to build demo scene: {}", e);
            std::process::exit(1);
        }
    };
    if opts.empty {
        scene.deselect_all();
    }

    let mut wm = WindowManager::new();
    if let Some(name) = opts.name.clone() {
        wm.set_dialog_driver(move |form: &mut DialogForm| {
            form.set_value(selection_to_collection::NAME_FIELD, name.clone());
            DialogChoice::Confirm
        });
    }
    if opts.cancel {
        wm.set_dialog_driver(|_form: &mut DialogForm| DialogChoice::Cancel);
    }

    let handle = match addon::register(&mut wm) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to register add-on: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = if opts.menu {
        let menu = if opts.outliner {
            MenuId::OutlinerCollection
        } else {
            MenuId::View3dObject
        };
        println!("Clicking '{}' in {}", selection_to_collection::DESCRIPTOR.label, menu);
        wm.click_menu(&mut scene, menu, selection_to_collection::DESCRIPTOR.label)
    } else {
        let space = if opts.outliner {
            SpaceType::Outliner
        } else {
            SpaceType::View3d
        };
        let chord = KeyChord::ctrl(Key::G);
        println!("Pressing {} in {}", chord, space);
        wm.press_key(&mut scene, space, chord)
    };

    match outcome {
        Ok(Some(status)) => println!("Status: {:?}", status),
        Ok(None) => println!("Nothing bound"),
        Err(e) => {
            eprintln!("Operator failed: {}", e);
            std::process::exit(1);
        }
    }

    for report in wm.reports().snapshot() {
        println!("  {}", report);
    }

    println!();
    println!("Scene: {}", scene.name);
    print_tree(&scene, scene.root_collection(), 0);

    if let Err(e) = handle.unregister(&mut wm) {
        eprintln!("Failed to unregister add-on: {}", e);
        std::process::exit(1);
    }
}

fn cmd_info() {
    let info = addon::INFO;
    println!("Addon:       {} v{}", info.name, info.version_string());
    println!("Author:      {}", info.author);
    println!("Category:    {}", info.category);
    println!("Location:    {}", info.location);
    println!(
        "Host:        {}.{}.{} or newer",
        info.host_version.0, info.host_version.1, info.host_version.2
    );
    println!("Description: {}", info.description);
    println!();

    let mut wm = WindowManager::new();
    let handle = match addon::register(&mut wm) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to register add-on: {}", e);
            std::process::exit(1);
        }
    };

    println!("Operators:");
    for idname in wm.operators().idnames() {
        if let Some(desc) = wm.operators().descriptor(idname) {
            println!("  {} - {}", desc.idname, desc.label);
        }
    }
    println!("Key bindings:");
    for km in wm.keyconfig().keymaps() {
        for item in km.items() {
            println!("  {} in '{}' ({})", item.chord, km.name, km.space);
        }
    }
    println!("Menu entries:");
    for menu in [MenuId::View3dObject, MenuId::OutlinerCollection] {
        for entry in wm.menus().entries(menu) {
            println!("  {}: {}", menu, entry.label);
        }
    }

    if let Err(e) = handle.unregister(&mut wm) {
        eprintln!("Failed to unregister add-on: {}", e);
        std::process::exit(1);
    }
}

fn cmd_tree(json: bool) {
    let scene = match demo_scene() {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Failed to build demo scene: {}", e);
            std::process::exit(1);
        }
    };

    if json {
        let value = tree_json(&scene, scene.root_collection());
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
    } else {
        println!("Scene: {}", scene.name);
        print_tree(&scene, scene.root_collection(), 0);
    }
}

fn cmd_version() {
    let build_date = option_env!("SEL2COLL_BUILD_DATE").unwrap_or("unknown");
    let build_time = option_env!("SEL2COLL_BUILD_TIME").unwrap_or("unknown");
    println!(
        "sel2coll {} (built {} {})",
        env!("CARGO_PKG_VERSION"),
        build_date,
        build_time
    );
}

fn print_tree(scene: &Scene, collection: CollectionId, depth: usize) {
    let Some(coll) = scene.collection(collection) else {
        return;
    };
    let indent = "  ".repeat(depth);
    println!("{}{}/", indent, coll.name);
    for &child in coll.children() {
        print_tree(scene, child, depth + 1);
    }
    for object in coll.iter() {
        if let Some(name) = scene.object_name(object) {
            println!("{}  {}", indent, name);
        }
    }
}

fn tree_json(scene: &Scene, collection: CollectionId) -> serde_json::Value {
    let Some(coll) = scene.collection(collection) else {
        return serde_json::Value::Null;
    };
    let children: Vec<serde_json::Value> = coll
        .children()
        .iter()
        .map(|&child| tree_json(scene, child))
        .collect();
    let objects: Vec<serde_json::Value> = coll
        .iter()
        .filter_map(|id| scene.object_name(id))
        .map(|name| serde_json::Value::String(name.to_string()))
        .collect();
    serde_json::json!({
        "name": coll.name,
        "children": children,
        "objects": objects,
    })
}
