/// A key paired with the value it owns.
#[derive(Debug)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }

    pub fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}
