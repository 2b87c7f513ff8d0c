use super::export::Export;
use super::product::Product;

/// Ordered, fixed sequence of products. No sorting, no dedup.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    products: Vec<Product>,
}

impl Collection {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn count(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Export every product, in order
    pub fn export(&self, as_array: bool) -> Vec<Export> {
        self.products.iter().map(|p| p.export(as_array)).collect()
    }
}

impl FromIterator<Product> for Collection {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Collection {
    type Item = Product;
    type IntoIter = std::vec::IntoIter<Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
