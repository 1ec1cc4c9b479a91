// Preset Catalog
// Built-in category/text bundles used to seed the UI without a network call.

use crate::models::Preset;

/// Category counted as a positive hit by the KVKK check.
pub const KVKK_POSITIVE_CATEGORY: &str = "Kişisel Veri İçerir";

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed binary category pair for the KVKK personal-data check.
pub fn kvkk_categories() -> Vec<String> {
    owned(&[KVKK_POSITIVE_CATEGORY, "Kişisel Veri İçermez"])
}

/// Default filter labels for filtering mode; restored on reset.
pub fn default_filter_labels() -> Vec<String> {
    owned(&[
        "Kişisel bilgi ve özel veri",
        "Küfür, hakaret ve şiddet içeriği",
        "Siyasi propaganda ve siyasi içerik",
    ])
}

/// Example texts for the KVKK check.
pub fn kvkk_example_texts() -> Vec<String> {
    owned(&[
        "Ahmet Yılmaz'ın TC kimlik numarası 12345678901'dir.",
        "Bugün hava çok güzel, parkta yürüyüş yaptık.",
        "Hasta Ayşe Demir'in kan grubu A Rh+ olarak tespit edildi.",
        "Şirketimiz 2024 yılında %15 büyüme kaydetti.",
        "Müşteri telefon numarası 0532 123 45 67 olarak güncellendi.",
        "Yeni ürün lansmanı önümüzdeki ay yapılacak.",
        "Çalışan maaş bilgisi: 45.000 TL net, IBAN: TR12 0001 0002 0003.",
        "Toplantı salonu yarın 14:00'te müsait.",
    ])
}

/// Example texts for filtering mode.
pub fn filter_example_texts() -> Vec<String> {
    owned(&[
        "Ahmet Yılmaz'ın TC kimlik numarası 12345678901'dir.",
        "Bugün hava çok güzel, parkta yürüyüş yaptık.",
        "Bu hükümeti destekleyen herkes aptal, muhalefet kazanmalı.",
        "Müşteri telefon numarası 0532 123 45 67 olarak güncellendi.",
        "Seni öldürürüm lan, bir daha gelme buraya!",
        "Yeni ürün lansmanı önümüzdeki ay yapılacak.",
        "Çalışan maaş bilgisi: 45.000 TL net, IBAN: TR12 0001 0002 0003.",
        "Toplantı salonu yarın 14:00'te müsait.",
        "Bu parti iktidara gelirse ülke batar, oy vermeyin.",
        "Hasta Ayşe Demir'in kan grubu A Rh+ olarak tespit edildi.",
    ])
}

/// Built-in classification presets shown in the preset selector.
pub fn classification_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "Müşteri Şikayetleri".to_string(),
            categories: owned(&[
                "Lojistik ve Kargo",
                "Ürün Kalitesi ve Performans",
                "Müşteri Hizmetleri ve Destek",
            ]),
            texts: owned(&[
                "Kargom 1 haftadır gelmedi, hala şubede bekliyor.",
                "Ürünün kumaşı çok ince, hemen yırtıldı.",
                "Telefondaki temsilci çok kaba davrandı, yardımcı olmadı.",
                "Paketleme çok özenliydi, teşekkürler.",
                "Cihazın şarjı çok çabuk bitiyor, beklentimi karşılamadı.",
                "İade süreci için kimseye ulaşamıyorum, maillere dönmüyorlar.",
                "Kurye arkadaş çok nazikti, kapıya kadar getirdi.",
                "Renkleri fotoğraftakinden farklı geldi, hayal kırıklığı.",
                "Canlı destek hattı sorunu 2 dakikada çözdü.",
                "Hızlı teslimat için teşekkür ederim, ertesi gün elimdeydi.",
            ]),
        },
        Preset {
            name: "Bilgisayar Bileşenleri".to_string(),
            categories: owned(&["Donanım", "Yazılım", "Çevre Birimleri"]),
            texts: owned(&[
                "RAM 16GB DDR5 çok hızlı çalışıyor.",
                "Windows 11 Pro lisansı aktif edilmedi.",
                "RTX 4070 ekran kartı oyunlarda mükemmel performans veriyor.",
                "Visual Studio Code eklentileri çok yavaş yükleniyor.",
                "Mekanik klavye tuş sesleri çok rahatsız edici.",
                "SSD 1TB NVMe okuma hızı beklentimin altında.",
                "Antivirüs yazılımı sürekli yanlış alarm veriyor.",
                "Bluetooth mouse bağlantısı sürekli kopuyor.",
                "İşlemci sıcaklığı 90 dereceyi geçiyor.",
                "Docker container'ları çok fazla bellek tüketiyor.",
            ]),
        },
        Preset {
            name: "Restoran Yorumları".to_string(),
            categories: owned(&["Yemek Kalitesi", "Servis ve Hizmet", "Ambiyans ve Mekan"]),
            texts: owned(&[
                "Etler çok iyi pişirilmiş, lezzet harika.",
                "Garson çok ilgisizdi, 20 dakika kimse gelmedi.",
                "Mekanın dekorasyonu çok şık ve modern.",
                "Porsiyon çok küçük, fiyatına göre yetersiz.",
                "Sipariş çok hızlı geldi, teşekkürler.",
                "Müzik çok yüksekti, konuşamadık.",
                "Tatlılar ev yapımı ve çok taze.",
                "Hesapta yanlış kalem vardı, düzeltmeleri uzun sürdü.",
                "Bahçe katı çok huzurlu, manzara güzel.",
                "Çorba soğuk geldi, iade ettik.",
            ]),
        },
        Preset {
            name: "Eğitim Platformu".to_string(),
            categories: owned(&["İçerik Kalitesi", "Teknik Sorunlar", "Fiyatlandırma"]),
            texts: owned(&[
                "Kurs içeriği çok detaylı ve anlaşılır anlatılmış.",
                "Video oynatıcı sürekli donuyor, izleyemiyorum.",
                "Aylık abonelik fiyatı çok yüksek.",
                "Eğitmen konuyu gerçek örneklerle açıklıyor, harika.",
                "Mobil uygulamada videolar açılmıyor.",
                "Yıllık plan indirimi çok cazip.",
                "Altyazılar yanlış, senkronize değil.",
                "Pratik ödevler öğrenmeyi pekiştiriyor.",
                "Ödeme sayfası hata veriyor, satın alamıyorum.",
                "Sertifika programı kariyerime çok katkı sağladı.",
            ]),
        },
    ]
}

pub fn find_preset(name: &str) -> Option<Preset> {
    classification_presets().into_iter().find(|p| p.name == name)
}
