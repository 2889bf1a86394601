//! Static seed data for the mock catalog.
//!
//! Every category has exactly [`PRODUCTS_PER_CATEGORY`] names and
//! descriptions, listed in the same order.

/// Number of generated products per category.
pub const PRODUCTS_PER_CATEGORY: usize = 10;

/// Seed record for one category.
pub struct CategorySeed {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Folder under `/public/images/` holding the category's pictures.
    pub image_folder: &'static str,
    pub product_names: [&'static str; PRODUCTS_PER_CATEGORY],
    pub product_descriptions: [&'static str; PRODUCTS_PER_CATEGORY],
}

/// Categories in ID order; the first entry becomes category 1.
pub const CATEGORY_SEEDS: [CategorySeed; 10] = [
    CategorySeed {
        name: "Головные уборы",
        icon: "🧢",
        description: "Стильные головные уборы",
        image_folder: "hats",
        product_names: [
            "Бейсболка Classic",
            "Шапка Winter Warm",
            "Кепка Sport Pro",
            "Кепка Summer",
            "Шляпа Fedora",
            "Бини Urban Style",
            "Кепка с вышивкой",
            "Шапка меховая",
            "Snapback Original",
            "Кепка дальнобойщика",
        ],
        product_descriptions: [
            "Классическая бейсболка из хлопка премиум качества. Регулируемый размер.",
            "Тёплая зимняя шапка с флисовой подкладкой. Идеальна для холодной погоды.",
            "Спортивная кепка с дышащей сеткой. Отводит влагу во время тренировок.",
            "Летняя панама защитит от солнца. Лёгкая и стильная.",
            "Элегантная фетровая шляпа для особых случаев.",
            "Стильная бини для городского образа. Мягкий акрил.",
            "Кепка с оригинальной вышивкой. Уникальный дизайн.",
            "Меховая шапка для суровых морозов. Натуральный мех.",
            "Оригинальный снэпбек с плоским козырьком.",
            "Классическая кепка дальнобойщика с сеткой.",
        ],
    },
    CategorySeed {
        name: "Бананы",
        icon: "🍌",
        description: "Свежие тропические бананы",
        image_folder: "fruits",
        product_names: [
            "Бананы Эквадор Premium",
            "Мини-бананы Baby",
            "Бананы органические",
            "Бананы зелёные",
            "Бананы красные",
            "Платано для жарки",
            "Бананы Cavendish",
            "Бананы Gros Michel",
            "Бананы Lady Finger",
            "Бананы переспелые",
        ],
        product_descriptions: [
            "Отборные бананы из Эквадора. Идеальная спелость.",
            "Маленькие сладкие бананы. Богаты калием.",
            "Выращены без пестицидов. Органический сертификат.",
            "Идеальны для выпечки и смузи.",
            "Редкий сорт красных бананов. Уникальный вкус.",
            "Бананы для жарки и тушения. Карибская кухня.",
            "Классический сорт бананов Cavendish.",
            "Легендарный сорт с богатым ароматом.",
            "Миниатюрные сладкие бананы Lady Finger.",
            "Переспелые бананы идеальны для бананового хлеба.",
        ],
    },
    CategorySeed {
        name: "Игры для ПК",
        icon: "🎮",
        description: "Лучшие игры для геймеров",
        image_folder: "games",
        product_names: [
            "Cyberpunk 2077",
            "The Witcher 3",
            "Red Dead Redemption 2",
            "GTA V Premium",
            "Elden Ring",
            "Hogwarts Legacy",
            "Starfield",
            "Baldur's Gate 3",
            "FIFA 24",
            "Call of Duty MW3",
        ],
        product_descriptions: [
            "Культовая игра в открытом мире будущего. RTX поддержка.",
            "Эпическая RPG от CD Projekt Red. Все DLC включены.",
            "Лучший вестерн в истории видеоигр. 4K Ultra.",
            "Криминальный мир Лос-Сантоса. Premium издание.",
            "Хардкорная action-RPG от FromSoftware.",
            "Магия Хогвартса ждёт. Полное погружение.",
            "Космическое приключение от Bethesda.",
            "Лучшая RPG 2023 года. 100+ часов геймплея.",
            "Новый сезон футбола. Ultimate Team режим.",
            "Шутер нового поколения. Мультиплеер.",
        ],
    },
    CategorySeed {
        name: "Стулья",
        icon: "🪑",
        description: "Комфортная мебель для дома",
        image_folder: "chairs",
        product_names: [
            "Офисное кресло Pro",
            "Стул обеденный Classic",
            "Геймерское кресло RGB",
            "Барный стул High",
            "Стул складной Travel",
            "Кресло-качалка Relax",
            "Детский стул Safety",
            "Стул дизайнерский",
            "Табурет кухонный",
            "Кресло директорское",
        ],
        product_descriptions: [
            "Эргономичное офисное кресло с поддержкой поясницы.",
            "Классический обеденный стул из массива дуба.",
            "Геймерское кресло с RGB подсветкой и массажем.",
            "Высокий барный стул с регулировкой высоты.",
            "Компактный складной стул для путешествий.",
            "Расслабляющее кресло-качалка из ротанга.",
            "Безопасный детский стул с ремнями.",
            "Дизайнерский стул в скандинавском стиле.",
            "Практичный кухонный табурет с хранением.",
            "Статусное директорское кресло натуральная кожа.",
        ],
    },
    CategorySeed {
        name: "Блокноты",
        icon: "📓",
        description: "Для записей и творчества",
        image_folder: "notebooks",
        product_names: [
            "Блокнот Moleskine",
            "Ежедневник Business",
            "Скетчбук Artist",
            "Тетрадь A4 Premium",
            "Планнер Weekly",
            "Блокнот на кольцах",
            "Записная книжка Mini",
            "Блокнот крафтовый",
            "Дневник личный",
            "Блокнот в точку",
        ],
        product_descriptions: [
            "Легендарный блокнот Moleskine. Сшитый переплёт.",
            "Деловой ежедневник с датами на 2024 год.",
            "Профессиональный скетчбук 200г бумага.",
            "Тетрадь формата A4, 96 листов, клетка.",
            "Еженедельный планировщик задач.",
            "Удобный блокнот на разъёмных кольцах.",
            "Карманная записная книжка для идей.",
            "Экологичный блокнот из крафт-бумаги.",
            "Личный дневник с замочком.",
            "Bullet journal блокнот в точку.",
        ],
    },
    CategorySeed {
        name: "Смартфоны",
        icon: "📱",
        description: "Современные гаджеты",
        image_folder: "phones",
        product_names: [
            "iPhone 15 Pro Max",
            "Samsung Galaxy S24",
            "Google Pixel 8 Pro",
            "Xiaomi 14 Ultra",
            "OnePlus 12",
            "iPhone 15",
            "Samsung Galaxy A54",
            "Huawei Mate 60",
            "Realme GT 5 Pro",
            "Nothing Phone 2",
        ],
        product_descriptions: [
            "Флагман Apple с титановым корпусом. A17 Pro чип.",
            "Топовый Android смартфон. AI камеры.",
            "Чистый Android и лучшие камеры от Google.",
            "Камерофон с Leica оптикой. Snapdragon 8 Gen 3.",
            "Быстрая зарядка 100W. Hasselblad камеры.",
            "Оптимальный выбор в линейке Apple.",
            "Лучший по соотношению цена/качество.",
            "Флагман Huawei с 5G нового поколения.",
            "Игровой смартфон с охлаждением.",
            "Уникальный дизайн с подсветкой Glyph.",
        ],
    },
    CategorySeed {
        name: "Книги",
        icon: "📚",
        description: "Мир знаний и приключений",
        image_folder: "books",
        product_names: [
            "Мастер и Маргарита",
            "1984 Оруэлл",
            "Гарри Поттер комплект",
            "Война и мир",
            "Преступление и наказание",
            "Маленький принц",
            "Три товарища",
            "Алхимик",
            "Шантарам",
            "Сто лет одиночества",
        ],
        product_descriptions: [
            "Культовый роман Булгакова. Подарочное издание.",
            "Антиутопия Джорджа Оруэлла. Классика жанра.",
            "Полное собрание о мальчике, который выжил.",
            "Эпопея Льва Толстого. Новое издание.",
            "Психологический роман Достоевского.",
            "Философская сказка Экзюпери. Иллюстрации автора.",
            "Трогательный роман Ремарка о дружбе.",
            "Бестселлер Пауло Коэльо о судьбе.",
            "Захватывающий роман Грегори Робертса.",
            "Шедевр магического реализма Маркеса.",
        ],
    },
    CategorySeed {
        name: "Спорт",
        icon: "⚽",
        description: "Спортивный инвентарь",
        image_folder: "sports",
        product_names: [
            "Мяч футбольный Adidas",
            "Гантели разборные 20кг",
            "Скакалка Speed",
            "Коврик для йоги Pro",
            "Теннисная ракетка",
            "Боксёрские перчатки",
            "Эспандер грудной",
            "Фитнес-браслет",
            "Велошлем Safety",
            "Ролики взрослые",
        ],
        product_descriptions: [
            "Официальный мяч UEFA. Термосклейка панелей.",
            "Набор разборных гантелей 2х10кг. Хромированные.",
            "Скоростная скакалка с подшипниками.",
            "Нескользящий коврик для йоги 6мм.",
            "Профессиональная теннисная ракетка.",
            "Боксёрские перчатки 12oz. Натуральная кожа.",
            "Многофункциональный эспандер 5 уровней.",
            "Умный браслет с пульсометром и GPS.",
            "Сертифицированный велошлем размер M-L.",
            "Роликовые коньки с ABEC-7 подшипниками.",
        ],
    },
    CategorySeed {
        name: "Косметика",
        icon: "💄",
        description: "Средства по уходу и красоте",
        image_folder: "cosmetics",
        product_names: [
            "Крем для лица Hydra",
            "Помада матовая Red",
            "Тени палетка Nude",
            "Тушь для ресниц Volume",
            "Сыворотка витаминная",
            "Крем для рук Winter",
            "Скраб для тела Coffee",
            "Маска для волос",
            "Духи Chanel №5",
            "Бальзам для губ",
        ],
        product_descriptions: [
            "Интенсивное увлажнение 24 часа. Гиалуроновая кислота.",
            "Стойкая матовая помада классического красного оттенка.",
            "Палетка теней 12 оттенков нюдовой гаммы.",
            "Объёмная тушь с эффектом накладных ресниц.",
            "Витаминная сыворотка С для сияния кожи.",
            "Защитный крем для рук в холодное время.",
            "Кофейный скраб для гладкой кожи тела.",
            "Восстанавливающая маска для волос.",
            "Легендарный аромат Chanel. 50мл.",
            "Увлажняющий бальзам для губ с витамином Е.",
        ],
    },
    CategorySeed {
        name: "Игрушки",
        icon: "🧸",
        description: "Радость для детей и взрослых",
        image_folder: "toys",
        product_names: [
            "Конструктор LEGO City",
            "Кукла Барби Dream",
            "Машинка Hot Wheels",
            "Плюшевый медведь XL",
            "Пазл 1000 деталей",
            "Настольная игра Монополия",
            "Робот-трансформер",
            "Кубик Рубика",
            "Набор Play-Doh",
            "Квадрокоптер",
        ],
        product_descriptions: [
            "Конструктор 500+ деталей. Городская станция.",
            "Коллекционная кукла в вечернем платье.",
            "Металлическая машинка масштаб 1:64.",
            "Гигантский плюшевый медведь 120см.",
            "Качественный пазл с красивым пейзажем.",
            "Классическая настольная экономическая игра.",
            "Робот-трансформер 2в1. Боевой режим.",
            "Оригинальный кубик Рубика 3x3.",
            "Набор пластилина 24 цвета с формочками.",
            "Квадрокоптер с камерой HD.",
        ],
    },
];

/// Cities offered by the profile form's city picker.
pub const CITIES: [&str; 12] = [
    "Москва",
    "Санкт-Петербург",
    "Краснодар",
    "Новосибирск",
    "Екатеринбург",
    "Казань",
    "Нижний Новгород",
    "Челябинск",
    "Самара",
    "Ростов-на-Дону",
    "Уфа",
    "Красноярск",
];
