/// Maps a key onto one of `bucket_count` buckets.
///
/// The hash tables in this crate route a key to its home bucket with `key mod bucket_count`, so
/// implementations must return a value in `0..bucket_count`. `bucket_count` is always positive.
///
/// # Examples
///
/// ```
/// use splay_collections::HashCode;
///
/// assert_eq!(7u32.hash_code(3), 1);
/// assert_eq!((-1i32).hash_code(3), 2);
/// ```
pub trait HashCode {
    fn hash_code(&self, bucket_count: usize) -> usize;
}

macro_rules! impl_unsigned_hash_code {
    ($($ty:ty),*) => {
        $(
            impl HashCode for $ty {
                fn hash_code(&self, bucket_count: usize) -> usize {
                    (*self as u128 % bucket_count as u128) as usize
                }
            }
        )*
    };
}

macro_rules! impl_signed_hash_code {
    ($($ty:ty),*) => {
        $(
            impl HashCode for $ty {
                fn hash_code(&self, bucket_count: usize) -> usize {
                    // Euclidean remainder keeps negative keys in range.
                    (*self as i128).rem_euclid(bucket_count as i128) as usize
                }
            }
        )*
    };
}

impl_unsigned_hash_code!(u8, u16, u32, u64, u128, usize);
impl_signed_hash_code!(i8, i16, i32, i64, i128, isize);
