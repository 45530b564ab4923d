//! Теги бинарного формата NBT.
//!
//! Каждое значение в потоке помечается однобайтовым идентификатором
//! тега. Набор тегов закрыт и зафиксирован форматом — ровно 11 штук,
//! расширение не предполагается. Используется в модулях `decode` и
//! `encode`.

use std::fmt;

use num_enum::TryFromPrimitive;

/// Идентификатор тега NBT.
///
/// `END` — структурный терминатор compound-а, самостоятельным значением
/// не бывает. Остальные теги описывают форму полезной нагрузки на
/// проводе (см. таблицу формата в README).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum TagKind {
    End = 0,
    /// 1 байт со знаком.
    Byte = 1,
    /// 2 байта со знаком, big-endian.
    Short = 2,
    /// 4 байта со знаком, big-endian.
    Int = 3,
    /// 8 байт со знаком, big-endian.
    Long = 4,
    /// IEEE 754, 4 байта, big-endian.
    Float = 5,
    /// IEEE 754, 8 байт, big-endian.
    Double = 6,
    /// INT-длина, затем сырые байты.
    ByteArray = 7,
    /// SHORT-длина в байтах, затем UTF-8.
    String = 8,
    /// Однородная последовательность: тег элемента, INT-количество, элементы.
    List = 9,
    /// Именованные теги до завершающего байта END.
    Compound = 10,
}

impl TagKind {
    /// Классическое имя тега, как его печатают дамперы формата.
    pub fn name(self) -> &'static str {
        match self {
            TagKind::End => "TAG_End",
            TagKind::Byte => "TAG_Byte",
            TagKind::Short => "TAG_Short",
            TagKind::Int => "TAG_Int",
            TagKind::Long => "TAG_Long",
            TagKind::Float => "TAG_Float",
            TagKind::Double => "TAG_Double",
            TagKind::ByteArray => "TAG_Byte_Array",
            TagKind::String => "TAG_String",
            TagKind::List => "TAG_List",
            TagKind::Compound => "TAG_Compound",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
