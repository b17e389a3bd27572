#![cfg_attr(feature = "no_entry", allow(dead_code))]

use anyhow::{bail, Result};
use kestrel_script_host::{ModuleTypes, Script, ScriptContext, ScriptEvent, SCRIPT_BASE_TYPE};
use std::any::Any;

#[derive(Default)]
struct Player {
    move_speed: f32,
    distance: f32,
    jumps: u32,
    on_jump: ScriptEvent,
}

impl Script for Player {
    fn on_update(&mut self, _ctx: &mut ScriptContext, dt: f32) -> Result<()> {
        self.distance += self.move_speed * dt;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[derive(Default)]
struct Cannon {
    shots: u32,
}

impl Script for Cannon {
    fn on_create(&mut self, _ctx: &mut ScriptContext) -> Result<()> {
        bail!("cannon has no ammunition configured")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn register(types: &mut ModuleTypes) {
    types
        .script::<Player>("Game.Player")
        .extends(SCRIPT_BASE_TYPE)
        .export("MoveSpeed", |player: &mut Player, speed: f32| player.move_speed = speed)
        .method("Jump", |player: &mut Player, ctx: &mut ScriptContext, (): ()| {
            player.jumps += 1;
            ctx.raise("OnJump", (player.jumps,));
            Ok(())
        })
        .event::<(u32,), _>("OnJump", |player: &mut Player| &mut player.on_jump)
        .register();
    types
        .script::<Cannon>("Game.Cannon")
        .extends(SCRIPT_BASE_TYPE)
        .method("Fire", |cannon: &mut Cannon, _ctx: &mut ScriptContext, (): ()| {
            cannon.shots += 1;
            Ok(())
        })
        .method("Salute", |cannon: &mut Cannon, _ctx: &mut ScriptContext, (count,): (u32,)| {
            cannon.shots += count;
            Ok(())
        })
        .register();
}

#[cfg(not(any(feature = "stale_api", feature = "no_entry")))]
kestrel_script_host::export_script_module!(register);

#[cfg(feature = "stale_api")]
#[no_mangle]
#[allow(improper_ctypes_definitions)]
pub extern "C" fn kestrel_script_module_entry() -> kestrel_script_host::module::ModuleExport {
    kestrel_script_host::module::ModuleExport {
        api_version: kestrel_script_host::SCRIPT_MODULE_API_VERSION + 1,
        register,
    }
}
