//! Interactive 3D view of the cube using kiss3d.

use std::time::Instant;

use kiss3d::event::{Action, Key, WindowEvent};
use kiss3d::prelude::*;

use twisty::input::{turn_for_key, KeyState, PAD_KEYS};
use twisty::lattice::{free_rotation_delta, idx_to_coord, NUM_CUBIES, REFERENCE_SLOT};
use twisty::Cube;

use crate::audio::TurnSounds;

/// Pad keys observed by the window layer, parallel to [`PAD_KEYS`].
const PAD_WINDOW_KEYS: [Key; 8] = [
    Key::Numpad1,
    Key::Numpad2,
    Key::Numpad3,
    Key::Numpad4,
    Key::Numpad6,
    Key::Numpad7,
    Key::Numpad8,
    Key::Numpad9,
];

/// Edge/held state for every key the viewer observes.
#[derive(Default)]
struct Controls {
    up: KeyState,
    down: KeyState,
    left: KeyState,
    right: KeyState,
    modifier: KeyState,
    reset: KeyState,
    dump: KeyState,
    pads: [KeyState; 8],
}

impl Controls {
    fn begin_frame(&mut self) {
        self.up.begin_frame();
        self.down.begin_frame();
        self.left.begin_frame();
        self.right.begin_frame();
        self.modifier.begin_frame();
        self.reset.begin_frame();
        self.dump.begin_frame();
        for pad in &mut self.pads {
            pad.begin_frame();
        }
    }

    fn state_for(&mut self, key: Key) -> Option<&mut KeyState> {
        if let Some(index) = PAD_WINDOW_KEYS.iter().position(|&pad| pad == key) {
            return Some(&mut self.pads[index]);
        }
        match key {
            Key::Up => Some(&mut self.up),
            Key::Down => Some(&mut self.down),
            Key::Left => Some(&mut self.left),
            Key::Right => Some(&mut self.right),
            Key::LShift => Some(&mut self.modifier),
            Key::R => Some(&mut self.reset),
            Key::Space => Some(&mut self.dump),
            _ => None,
        }
    }

    fn handle(&mut self, key: Key, action: Action) {
        if let Some(state) = self.state_for(key) {
            if action == Action::Press {
                state.press();
            } else if action == Action::Release {
                state.release();
            }
        }
    }
}

/// A scene cube bound to one lattice slot.
struct CubieNode {
    node: SceneNode3d,
    slot: usize,
}

/// Color gradient over home slot coordinates so every cubie stays
/// identifiable while it moves.
fn cubie_color(x: usize, y: usize, z: usize) -> Color {
    let channel = |c: usize| 0.25 + c as f32 * 0.35;
    Color::new(channel(x), channel(y), channel(z), 1.0)
}

/// Adds the 27 cubies to the scene at their current transforms.
fn build_scene(scene: &mut SceneNode3d, cube: &Cube) -> Vec<CubieNode> {
    /// Rendered edge length of one cubie (the lattice spacing leaves a gap).
    const CUBIE_SIZE: f32 = 1.0;

    (0..NUM_CUBIES)
        .map(|slot| {
            let (x, y, z) = idx_to_coord(slot);
            let position = cube.lattice().cubie(slot).position();
            let node = scene
                .add_cube(CUBIE_SIZE, CUBIE_SIZE, CUBIE_SIZE)
                .set_color(cubie_color(x, y, z))
                .set_position(Vec3::new(position.x, position.y, position.z));
            CubieNode { node, slot }
        })
        .collect()
}

/// Opens the interactive viewer and runs the frame loop until the window
/// closes.
pub fn display(cube: Cube) {
    pollster::block_on(display_async(cube));
}

async fn display_async(mut cube: Cube) {
    let mut window = Window::new(
        "Twisty Cube - [arrows] rotate, [numpad] turn, [Shift] vertical, [R] reset",
    )
    .await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(9.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let mut cubie_nodes = build_scene(&mut scene, &cube);

    let sounds = match TurnSounds::new() {
        Ok(sounds) => Some(sounds),
        Err(error) => {
            eprintln!("Audio unavailable, turns will be silent: {error}");
            None
        }
    };
    let mut rng = rand::rng();

    let mut controls = Controls::default();
    let mut last_frame = Instant::now();

    loop {
        controls.begin_frame();
        for event in window.events().iter() {
            if let WindowEvent::Key(key, action, _) = event.value {
                controls.handle(key, action);
            }
        }

        let now = Instant::now();
        let delta_time = (now - last_frame).as_secs_f32();
        last_frame = now;

        // free-look rotation from held arrows, integrated over the frame
        let pitch = (controls.down.held as i32 - controls.up.held as i32) as f32;
        let yaw = (controls.right.held as i32 - controls.left.held as i32) as f32;
        if pitch != 0.0 || yaw != 0.0 {
            cube.free_rotate(free_rotation_delta(pitch, yaw, delta_time));
        }

        // edge-triggered layer turns
        let vertical = controls.modifier.held;
        for (index, &pad) in PAD_KEYS.iter().enumerate() {
            if controls.pads[index].pressed_this_frame {
                if let Some(request) = turn_for_key(pad, vertical) {
                    cube.turn(request);
                    if let Some(sounds) = &sounds {
                        sounds.play(&mut rng);
                    }
                }
            }
        }

        if controls.reset.pressed_this_frame {
            cube.reset();
        }
        if controls.dump.pressed_this_frame {
            print!("{}", cube.lattice().cubie(REFERENCE_SLOT).format_columns());
        }

        // sync the scene from the settled lattice
        for cubie in &mut cubie_nodes {
            let transform = cube.lattice().cubie(cubie.slot);
            let position = transform.position();
            let rotation = transform.orientation();
            cubie.node.set_position(Vec3::new(position.x, position.y, position.z));
            cubie
                .node
                .set_rotation(Quat::from_xyzw(rotation.x, rotation.y, rotation.z, rotation.w));
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
