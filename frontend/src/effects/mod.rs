pub mod floating_cats;
pub mod frame_loop;
pub mod paw_trail;
