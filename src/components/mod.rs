//! ECS components for scene items.
//!
//! This module groups all component types the factories attach to entities.
//! General components are shared by every item kind; the sprite components
//! are attached only to animated sprites.
//!
//! Submodules overview:
//! - [`dimensions`] – width and height in world units
//! - [`mainitem`] – identity, tags and kind of a scene item
//! - [`mapposition`] – local position relative to the parent node
//! - [`parentnode`] – parent link in the scene hierarchy
//! - [`playmode`] – frame traversal policy and its legacy numeric codes
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – 2D scale factor
//! - [`spriteanimation`] – animation definition: frame ranges, fps, current clip
//! - [`spriteanimationstate`] – playback cursor over the resolved frames
//! - [`textureregion`] – the atlas region currently displayed
//! - [`tint`] – color modulation
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod dimensions;
pub mod mainitem;
pub mod mapposition;
pub mod parentnode;
pub mod playmode;
pub mod rotation;
pub mod scale;
pub mod spriteanimation;
pub mod spriteanimationstate;
pub mod textureregion;
pub mod tint;
pub mod zindex;
