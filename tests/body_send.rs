//! Compile-time guards for sharing worlds across stepping threads.
use static_assertions::{assert_impl_all, assert_not_impl_any};
use voxel_body::{Body, CapsuleY, Contact, SparseVoxelWorld, VoxelWorld};

assert_impl_all!(Body<'static, SparseVoxelWorld>: Send, Sync);
assert_impl_all!(SparseVoxelWorld: Send, Sync, VoxelWorld);
assert_impl_all!(CapsuleY: Copy, Send);
assert_impl_all!(Contact: Copy);
assert_not_impl_any!(Body<'static, SparseVoxelWorld>: Clone);
