use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use vector::Vector;

struct SeqVisitor<'de, A>
where
    A: Deserialize<'de> + Clone + 'static,
{
    phantom_a: PhantomData<A>,
    phantom_lifetime: PhantomData<&'de ()>,
}

impl<'de, A> SeqVisitor<'de, A>
where
    A: Deserialize<'de> + Clone + 'static,
{
    pub fn new() -> SeqVisitor<'de, A> {
        SeqVisitor {
            phantom_a: PhantomData,
            phantom_lifetime: PhantomData,
        }
    }
}

impl<'de, A> Visitor<'de> for SeqVisitor<'de, A>
where
    A: Deserialize<'de> + Clone + 'static,
{
    type Value = Vector<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<Access>(self, mut access: Access) -> Result<Self::Value, Access::Error>
    where
        Access: SeqAccess<'de>,
    {
        let mut vector = Vector::new();
        while let Some(i) = access.next_element()? {
            vector = vector.push_back(i)
        }
        Ok(vector)
    }
}

impl<'de, A: Deserialize<'de> + Clone + 'static> Deserialize<'de> for Vector<A> {
    fn deserialize<D>(des: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        des.deserialize_seq(SeqVisitor::new())
    }
}

impl<A: Serialize + Clone> Serialize for Vector<A> {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = ser.serialize_seq(Some(self.len()))?;
        for i in self.iter() {
            s.serialize_element(i)?;
        }
        s.end()
    }
}

// Tests

#[cfg(test)]
mod test {
    use super::*;
    use proptest::num::i32;
    use serde_json::{from_str, to_string};
    use vector::proptest::vector;

    proptest! {
        #[test]
        fn ser_vector(ref v in vector(i32::ANY, 0..100)) {
            assert_eq!(v, &from_str::<Vector<i32>>(&to_string(&v).unwrap()).unwrap());
        }
    }
}
